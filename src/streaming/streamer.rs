//! World streamer
//!
//! Keeps the set of resident chunks equal to the footprint around the
//! tracked position. Runs a full diff each time the tracked position
//! crosses a cell boundary; missing chunks are synthesized in parallel and
//! then registered on the calling thread.

use std::collections::HashSet;

use glam::Vec3;
use rayon::prelude::*;

use super::chunk::Chunk;
use super::config::WorldGenerationConfig;
use super::coord::CellCoord;
use super::loading::{ChunkLoadingStrategy, CircularLoading};
use super::registry::ChunkRegistry;
use crate::core::{Observers, Result, SubscriptionId};
use crate::navigation::GroundProbe;
use crate::terrain::TerrainMeshSynthesizer;

/// Lifecycle of the streamer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamerState {
    /// No footprint computed yet
    Uninitialized,
    /// First footprint fully created
    Initialized,
    /// Re-evaluated after at least one cell crossing
    Steady,
}

/// Notifications published by the world
#[derive(Clone, Debug, PartialEq)]
pub enum WorldEvent {
    ChunkCreated(CellCoord),
    ChunkDestroyed(CellCoord),
    NavMeshUpdated { center: Vec3 },
}

/// Outcome of one streaming pass
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StreamUpdate {
    /// Cell containing the tracked position
    pub cell: CellCoord,
    /// Cells whose chunks were created, sorted
    pub created: Vec<CellCoord>,
    /// Cells whose chunks were destroyed, sorted
    pub destroyed: Vec<CellCoord>,
}

impl StreamUpdate {
    /// Whether the pass changed nothing
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.destroyed.is_empty()
    }
}

/// Loads and unloads terrain chunks around a moving position
pub struct WorldStreamer {
    config: WorldGenerationConfig,
    synthesizer: TerrainMeshSynthesizer,
    strategy: Box<dyn ChunkLoadingStrategy>,
    registry: ChunkRegistry,
    state: StreamerState,
    current_cell: Option<CellCoord>,
    events: Observers<WorldEvent>,
}

impl WorldStreamer {
    /// Create a streamer with circular loading.
    ///
    /// The config is validated before any chunk work happens.
    pub fn new(config: WorldGenerationConfig) -> Result<Self> {
        Self::with_strategy(config, Box::new(CircularLoading))
    }

    /// Create a streamer with a custom loading footprint
    pub fn with_strategy(
        config: WorldGenerationConfig,
        strategy: Box<dyn ChunkLoadingStrategy>,
    ) -> Result<Self> {
        let synthesizer = TerrainMeshSynthesizer::new(&config)?;
        log::info!(
            "World streamer ready: seed {}, chunk size {}, render distance {}",
            config.world_seed,
            config.chunk_size,
            config.render_distance
        );
        Ok(Self {
            config,
            synthesizer,
            strategy,
            registry: ChunkRegistry::new(),
            state: StreamerState::Uninitialized,
            current_cell: None,
            events: Observers::new(),
        })
    }

    /// React to a new tracked position.
    ///
    /// Does nothing when the position is still in the current cell. Otherwise
    /// the registry is reconciled with the desired footprint: missing cells
    /// are created, cells outside the footprint are dropped.
    pub fn on_tracked_position_changed(&mut self, pos: Vec3) -> StreamUpdate {
        let cell = CellCoord::from_world_pos(pos, self.config.chunk_size);
        if self.current_cell == Some(cell) {
            return StreamUpdate {
                cell,
                ..Default::default()
            };
        }

        let update = self.reconcile(cell);
        self.current_cell = Some(cell);
        self.state = match self.state {
            StreamerState::Uninitialized => StreamerState::Initialized,
            StreamerState::Initialized | StreamerState::Steady => StreamerState::Steady,
        };

        log::debug!(
            "Streamed around {}: +{} -{} ({} resident)",
            cell,
            update.created.len(),
            update.destroyed.len(),
            self.registry.len()
        );
        update
    }

    fn reconcile(&mut self, cell: CellCoord) -> StreamUpdate {
        let desired = self
            .strategy
            .chunks_to_load(cell, self.config.render_distance);

        let mut missing: Vec<CellCoord> = desired
            .iter()
            .copied()
            .filter(|c| !self.registry.contains(*c))
            .collect();
        missing.sort_unstable();

        let mut superfluous: Vec<CellCoord> = self
            .registry
            .cells()
            .copied()
            .filter(|c| !desired.contains(c))
            .collect();
        superfluous.sort_unstable();

        let synthesizer = &self.synthesizer;
        let config = &self.config;
        let built: Vec<Chunk> = missing
            .par_iter()
            .map(|&c| Chunk::new(c, config.chunk_size, synthesizer.generate_chunk(c, config)))
            .collect();

        let mut created = Vec::with_capacity(built.len());
        for chunk in built {
            let coord = chunk.coord;
            if self.registry.insert(chunk) {
                created.push(coord);
                self.events.notify(&WorldEvent::ChunkCreated(coord));
            }
        }

        let mut destroyed = Vec::with_capacity(superfluous.len());
        for coord in superfluous {
            if self.registry.remove(coord).is_some() {
                destroyed.push(coord);
                self.events.notify(&WorldEvent::ChunkDestroyed(coord));
            }
        }

        debug_assert_eq!(self.registry.active_cells(), desired);

        StreamUpdate {
            cell,
            created,
            destroyed,
        }
    }

    /// Drop every chunk and return to `Uninitialized`
    pub fn clear(&mut self) -> usize {
        let mut cells = self.registry.clear();
        cells.sort_unstable();
        for coord in &cells {
            self.events.notify(&WorldEvent::ChunkDestroyed(*coord));
        }
        self.current_cell = None;
        self.state = StreamerState::Uninitialized;
        log::info!("World cleared ({} chunks destroyed)", cells.len());
        cells.len()
    }

    /// Terrain height at a world XZ position, if a resident chunk covers it
    pub fn ground_height(&self, x: f32, z: f32) -> Option<f32> {
        let cell = CellCoord::from_world_pos(Vec3::new(x, 0.0, z), self.config.chunk_size);
        self.registry.get(cell)?.height_at_world(x, z)
    }

    pub fn state(&self) -> StreamerState {
        self.state
    }

    /// Cell of the last streaming pass
    pub fn current_cell(&self) -> Option<CellCoord> {
        self.current_cell
    }

    pub fn active_cells(&self) -> HashSet<CellCoord> {
        self.registry.active_cells()
    }

    pub fn chunk(&self, cell: CellCoord) -> Option<&Chunk> {
        self.registry.get(cell)
    }

    pub fn chunk_count(&self) -> usize {
        self.registry.len()
    }

    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.registry.chunks()
    }

    pub fn config(&self) -> &WorldGenerationConfig {
        &self.config
    }

    /// Register a world event observer
    pub fn subscribe(&mut self, callback: impl FnMut(&WorldEvent) + 'static) -> SubscriptionId {
        self.events.subscribe(callback)
    }

    pub fn events_mut(&mut self) -> &mut Observers<WorldEvent> {
        &mut self.events
    }
}

impl std::fmt::Debug for WorldStreamer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorldStreamer")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("current_cell", &self.current_cell)
            .field("chunks", &self.registry.len())
            .finish()
    }
}

impl GroundProbe for WorldStreamer {
    fn raycast_down(&self, origin: Vec3, max_distance: f32) -> Option<Vec3> {
        let height = self.ground_height(origin.x, origin.z)?;
        let drop = origin.y - height;
        if (0.0..=max_distance).contains(&drop) {
            Some(Vec3::new(origin.x, height, origin.z))
        } else {
            None
        }
    }
}
