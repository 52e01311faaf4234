//! Periodic navigable-surface rebuilds around a moving target

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::surface::NavigableSurface;
use crate::core::{Delay, Error, Observers, Result};
use crate::streaming::WorldEvent;

/// Smallest rebuild radius; config validation rejects less and the setter clamps up
pub const MIN_REBUILD_RADIUS: f32 = 10.0;

/// Rebuild timing and footprint
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavMeshRebuildConfig {
    /// Seconds between rebuild checks
    pub rebuild_interval: f32,
    /// Half-size of the rebuilt box; the target must move half of this to trigger a rebuild
    pub rebuild_radius: f32,
    /// Whether periodic checks run at all
    pub continuous: bool,
}

impl Default for NavMeshRebuildConfig {
    fn default() -> Self {
        Self {
            rebuild_interval: 1.0,
            rebuild_radius: 50.0,
            continuous: true,
        }
    }
}

impl NavMeshRebuildConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.rebuild_interval >= 0.0) {
            return Err(Error::config(format!(
                "rebuild_interval must not be negative, got {}",
                self.rebuild_interval
            )));
        }
        if !(self.rebuild_radius >= MIN_REBUILD_RADIUS) {
            return Err(Error::config(format!(
                "rebuild_radius must be at least {}, got {}",
                MIN_REBUILD_RADIUS, self.rebuild_radius
            )));
        }
        Ok(())
    }
}

/// Decides when the external navigable surface should be rebuilt
#[derive(Debug)]
pub struct NavMeshRebuilder {
    config: NavMeshRebuildConfig,
    timer: Delay,
    last_rebuild_position: Option<Vec3>,
    rebuild_count: u32,
    events: Observers<WorldEvent>,
}

impl NavMeshRebuilder {
    /// Create a rebuilder; the first periodic check happens one interval from now
    pub fn new(config: NavMeshRebuildConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            timer: Delay::new(config.rebuild_interval),
            config,
            last_rebuild_position: None,
            rebuild_count: 0,
            events: Observers::new(),
        })
    }

    /// Rebuild immediately around the target, or around the last rebuild center without one
    pub fn rebuild_now(&mut self, target: Option<Vec3>, surface: &mut dyn NavigableSurface) {
        let center = target
            .or(self.last_rebuild_position)
            .unwrap_or(Vec3::ZERO);
        self.rebuild_at(center, surface);
    }

    /// Force a rebuild centered on `position`
    pub fn rebuild_at(&mut self, position: Vec3, surface: &mut dyn NavigableSurface) {
        let extent = Vec3::splat(self.config.rebuild_radius * 2.0);
        surface.build_or_rebuild(position, extent);

        self.last_rebuild_position = Some(position);
        self.rebuild_count += 1;
        log::debug!("Navigable surface rebuilt at {:?} (extent {:?})", position, extent);

        self.events.notify(&WorldEvent::NavMeshUpdated { center: position });
    }

    /// Advance the periodic check. Returns true if a rebuild happened.
    ///
    /// With no target every interval rebuilds; with a target only a move of
    /// more than half the radius since the last rebuild does.
    pub fn tick(&mut self, dt: f32, target: Option<Vec3>, surface: &mut dyn NavigableSurface) -> bool {
        if !self.config.continuous {
            return false;
        }

        let mut budget = dt.max(0.0);
        if !self.timer.advance(&mut budget) {
            return false;
        }
        self.timer = Delay::new(self.config.rebuild_interval);

        let should_rebuild = match (target, self.last_rebuild_position) {
            (None, _) => true,
            (Some(_), None) => true,
            (Some(t), Some(last)) => t.distance(last) > self.config.rebuild_radius * 0.5,
        };

        if should_rebuild {
            self.rebuild_now(target, surface);
        }
        should_rebuild
    }

    /// Adjust the rebuild radius (clamped to at least [`MIN_REBUILD_RADIUS`])
    pub fn set_rebuild_radius(&mut self, radius: f32) {
        self.config.rebuild_radius = radius.max(MIN_REBUILD_RADIUS);
    }

    pub fn config(&self) -> &NavMeshRebuildConfig {
        &self.config
    }

    /// Center of the most recent rebuild
    pub fn last_rebuild_position(&self) -> Option<Vec3> {
        self.last_rebuild_position
    }

    /// Number of rebuilds so far
    pub fn rebuild_count(&self) -> u32 {
        self.rebuild_count
    }

    /// Observer list for `NavMeshUpdated` notifications
    pub fn events_mut(&mut self) -> &mut Observers<WorldEvent> {
        &mut self.events
    }
}
