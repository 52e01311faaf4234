//! Game session
//!
//! Owns the world streamer, navigation rebuilds and wave spawner for one
//! play session and drives them once per frame.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::core::{FrameClock, Result};
use crate::navigation::{NavMeshRebuildConfig, NavMeshRebuilder, NavigableSurface};
use crate::spawning::{
    PrototypeLibrary, SpawnEnvironment, SpawnRecord, SpawnerConfig, WaveDefinition, WaveSequencer,
};
use crate::streaming::{StreamUpdate, TrackedPosition, WorldGenerationConfig, WorldStreamer};

/// Every tunable of a session, loadable from JSON
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub world: WorldGenerationConfig,
    pub navigation: NavMeshRebuildConfig,
    pub spawner: SpawnerConfig,
    pub initial_player_position: Vec3,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<()> {
        self.world.validate()?;
        self.navigation.validate()?;
        self.spawner.validate()
    }

    /// Parse from a JSON string; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn load_json(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded session config from {}", path.display());
        Ok(config)
    }

    /// Save as pretty-printed JSON
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// What one [`GameSession::update`] did
#[derive(Clone, Debug, Default)]
pub struct SessionUpdate {
    /// Present when the player moved far enough to be re-evaluated
    pub stream: Option<StreamUpdate>,
    pub nav_rebuilt: bool,
    pub spawned: Vec<SpawnRecord>,
}

/// Composition root for a running game
pub struct GameSession {
    clock: FrameClock,
    tracked: TrackedPosition,
    streamer: WorldStreamer,
    rebuilder: NavMeshRebuilder,
    surface: Box<dyn NavigableSurface>,
    spawner: WaveSequencer,
}

impl GameSession {
    /// Build a session and stream the world around the initial player position.
    ///
    /// A zero world seed is replaced with a random one first.
    pub fn new(
        config: SessionConfig,
        waves: Vec<WaveDefinition>,
        library: PrototypeLibrary,
        surface: Box<dyn NavigableSurface>,
    ) -> Result<Self> {
        config.validate()?;

        let streamer = WorldStreamer::new(config.world.resolve_seed())?;
        let rebuilder = NavMeshRebuilder::new(config.navigation)?;
        let spawner = WaveSequencer::new(config.spawner, waves, library)?;

        let mut session = Self {
            clock: FrameClock::new(),
            tracked: TrackedPosition::new(config.initial_player_position),
            streamer,
            rebuilder,
            surface,
            spawner,
        };
        session.move_player(config.initial_player_position);
        Ok(session)
    }

    /// Advance one frame with the player at `player_pos`
    pub fn update(&mut self, dt: f32, player_pos: Vec3) -> SessionUpdate {
        self.clock.tick(dt);

        let stream = self.move_player(player_pos);
        let target = Some(self.tracked.position());
        let nav_rebuilt = self.rebuilder.tick(dt, target, self.surface.as_mut());

        let env = SpawnEnvironment::new(&self.streamer, self.surface.as_ref());
        let spawned = self.spawner.tick(dt, &env);

        SessionUpdate {
            stream,
            nav_rebuilt,
            spawned,
        }
    }

    /// Feed a position sample; rebuilds navigation when chunks were created
    fn move_player(&mut self, pos: Vec3) -> Option<StreamUpdate> {
        let pos = self.tracked.sample(pos)?;
        let update = self.streamer.on_tracked_position_changed(pos);
        if !update.created.is_empty() {
            self.rebuilder.rebuild_at(pos, self.surface.as_mut());
        }
        Some(update)
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn player_position(&self) -> Vec3 {
        self.tracked.position()
    }

    pub fn streamer(&self) -> &WorldStreamer {
        &self.streamer
    }

    pub fn streamer_mut(&mut self) -> &mut WorldStreamer {
        &mut self.streamer
    }

    pub fn rebuilder(&self) -> &NavMeshRebuilder {
        &self.rebuilder
    }

    pub fn rebuilder_mut(&mut self) -> &mut NavMeshRebuilder {
        &mut self.rebuilder
    }

    pub fn spawner(&self) -> &WaveSequencer {
        &self.spawner
    }

    pub fn spawner_mut(&mut self) -> &mut WaveSequencer {
        &mut self.spawner
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("clock", &self.clock)
            .field("player", &self.tracked.position())
            .field("streamer", &self.streamer)
            .field("spawner", &self.spawner)
            .finish()
    }
}
