//! Chunk streaming around a tracked position

pub mod coord;
pub mod config;
pub mod chunk;
pub mod loading;
pub mod registry;
pub mod tracking;
pub mod streamer;

pub use coord::CellCoord;
pub use config::WorldGenerationConfig;
pub use chunk::Chunk;
pub use loading::{ChunkLoadingStrategy, CircularLoading};
pub use registry::ChunkRegistry;
pub use tracking::{TrackedPosition, POSITION_EPSILON};
pub use streamer::{StreamUpdate, StreamerState, WorldEvent, WorldStreamer};
