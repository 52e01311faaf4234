//! World generation configuration

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Immutable-per-session parameters for terrain synthesis and streaming.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldGenerationConfig {
    /// Radius of the loaded footprint, in cells
    pub render_distance: i32,
    /// Edge length of one cell in world units; also the vertex grid resolution
    pub chunk_size: i32,
    /// Multiplier applied to the `[0, 1]` noise value
    pub height_scale: f32,
    /// Frequency applied to world coordinates before sampling noise
    pub noise_scale: f32,
    /// Noise seed. 0 = choose one at session start.
    pub world_seed: u32,
}

impl Default for WorldGenerationConfig {
    fn default() -> Self {
        Self {
            render_distance: 3,
            chunk_size: 20,
            height_scale: 1.5,
            noise_scale: 0.3,
            world_seed: 0,
        }
    }
}

impl WorldGenerationConfig {
    /// Reject values that would make chunk work meaningless
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size <= 0 {
            return Err(Error::config(format!(
                "chunk_size must be positive, got {}",
                self.chunk_size
            )));
        }
        if self.render_distance < 0 {
            return Err(Error::config(format!(
                "render_distance must not be negative, got {}",
                self.render_distance
            )));
        }
        if !self.height_scale.is_finite() || !self.noise_scale.is_finite() {
            return Err(Error::config("height_scale and noise_scale must be finite"));
        }
        Ok(())
    }

    /// Replace a zero seed with a random one, returning the effective config
    pub fn resolve_seed(mut self) -> Self {
        if self.world_seed == 0 {
            self.world_seed = rand::random_range(1..10_000);
            log::info!("No world seed configured, using random seed {}", self.world_seed);
        }
        self
    }
}
