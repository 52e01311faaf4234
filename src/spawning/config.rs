//! Spawner configuration

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::wave::SpawnArea;
use crate::core::{Error, Result};

/// Timing, pooling and placement settings for the wave spawner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnerConfig {
    /// Restart from the first wave after the last completes
    pub loop_waves: bool,
    /// Seconds between the last wave and the restart
    pub loop_delay: f32,
    /// Seconds waited after each spawn
    pub time_between_spawns: f32,
    /// Start waves as soon as the spawner is created
    pub auto_start: bool,
    pub use_object_pooling: bool,
    /// Inactive entities created per prototype up front
    pub initial_pool_size: usize,
    /// Fallback position when no spawn area exists
    pub origin: Vec3,
    /// Fixed seed for placement randomness; random when unset
    pub rng_seed: Option<u64>,
    pub spawn_areas: Vec<SpawnArea>,
}

impl Default for SpawnerConfig {
    fn default() -> Self {
        Self {
            loop_waves: false,
            loop_delay: 10.0,
            time_between_spawns: 0.2,
            auto_start: true,
            use_object_pooling: true,
            initial_pool_size: 20,
            origin: Vec3::ZERO,
            rng_seed: None,
            spawn_areas: Vec::new(),
        }
    }
}

impl SpawnerConfig {
    pub fn validate(&self) -> Result<()> {
        if !(self.loop_delay >= 0.0) {
            return Err(Error::config(format!("loop_delay must not be negative, got {}", self.loop_delay)));
        }
        if !(self.time_between_spawns >= 0.0) {
            return Err(Error::config(format!(
                "time_between_spawns must not be negative, got {}",
                self.time_between_spawns
            )));
        }
        for (i, area) in self.spawn_areas.iter().enumerate() {
            if !(area.radius >= 0.0) || !(area.min_height_from_ground >= 0.0) {
                return Err(Error::config(format!(
                    "spawn area {} has negative radius or clearance",
                    i
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SpawnerConfig::default();
        assert!(!config.loop_waves);
        assert_eq!(config.loop_delay, 10.0);
        assert_eq!(config.time_between_spawns, 0.2);
        assert!(config.auto_start);
        assert!(config.use_object_pooling);
        assert_eq!(config.initial_pool_size, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative() {
        let config = SpawnerConfig { time_between_spawns: -0.1, ..Default::default() };
        assert!(config.validate().is_err());

        let config = SpawnerConfig { loop_delay: f32::NAN, ..Default::default() };
        assert!(config.validate().is_err());

        let config = SpawnerConfig {
            spawn_areas: vec![SpawnArea::new(Vec3::ZERO, -1.0)],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json() {
        let config: SpawnerConfig =
            serde_json::from_str(r#"{ "loop_waves": true, "rng_seed": 7 }"#).unwrap();
        assert!(config.loop_waves);
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.initial_pool_size, 20);
    }
}
