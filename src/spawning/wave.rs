//! Wave authoring types

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::prototype::PrototypeId;

/// How many instances of a prototype a wave spawns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrototypeCount {
    pub prototype: PrototypeId,
    pub count: u32,
}

impl PrototypeCount {
    pub fn new(prototype: PrototypeId, count: u32) -> Self {
        Self { prototype, count }
    }
}

/// Fixed placement authored in the scene
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub position: Vec3,
    pub rotation: Quat,
}

impl SpawnPoint {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }
}

/// One wave of enemies
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveDefinition {
    pub name: String,
    /// Spawned in order, each pair fully before the next
    pub spawns: Vec<PrototypeCount>,
    /// Seconds to wait before the wave starts
    pub delay_before_wave: f32,
    pub use_specific_spawn_points: bool,
    /// `None` marks a point whose scene object no longer exists
    pub spawn_points: Vec<Option<SpawnPoint>>,
}

impl Default for WaveDefinition {
    fn default() -> Self {
        Self {
            name: String::new(),
            spawns: Vec::new(),
            delay_before_wave: 3.0,
            use_specific_spawn_points: false,
            spawn_points: Vec::new(),
        }
    }
}

impl WaveDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_spawn(mut self, prototype: PrototypeId, count: u32) -> Self {
        self.spawns.push(PrototypeCount::new(prototype, count));
        self
    }

    pub fn with_delay(mut self, delay_before_wave: f32) -> Self {
        self.delay_before_wave = delay_before_wave;
        self
    }

    /// Use explicit spawn points instead of spawn areas
    pub fn with_spawn_points(mut self, points: Vec<Option<SpawnPoint>>) -> Self {
        self.use_specific_spawn_points = true;
        self.spawn_points = points;
        self
    }

    /// Total entities this wave spawns
    pub fn total_spawns(&self) -> u32 {
        self.spawns.iter().map(|s| s.count).sum()
    }
}

/// Spherical region that random spawns are drawn from
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnArea {
    pub center: Vec3,
    pub radius: f32,
    /// Clearance above the ground; 0 disables ground snapping
    pub min_height_from_ground: f32,
    /// Snap onto the navigable surface
    pub use_nav_mesh: bool,
}

impl Default for SpawnArea {
    fn default() -> Self {
        Self {
            center: Vec3::ZERO,
            radius: 5.0,
            min_height_from_ground: 0.0,
            use_nav_mesh: false,
        }
    }
}

impl SpawnArea {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius,
            ..Default::default()
        }
    }
}

/// Wave lifecycle notifications
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WaveEvent {
    WaveStarted { index: usize, name: String },
    WaveCompleted { index: usize, name: String },
    AllWavesCompleted,
}
