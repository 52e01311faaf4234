//! Wave spawning over pooled entities

pub mod prototype;
pub mod pool;
pub mod registry;
pub mod wave;
pub mod config;
pub mod resolver;
pub mod sequencer;

pub use prototype::{Prototype, PrototypeId, PrototypeLibrary};
pub use pool::ObjectPool;
pub use registry::{PoolHandle, PoolRegistry, PoolState, Pooled, PrototypeName, RegistryId, Released, Transform};
pub use wave::{PrototypeCount, SpawnArea, SpawnPoint, WaveDefinition, WaveEvent};
pub use config::SpawnerConfig;
pub use resolver::{SpawnEnvironment, SpawnPositionResolver, GROUND_PROBE_DISTANCE, GROUND_PROBE_HEIGHT};
pub use sequencer::{SequencerState, SpawnRecord, WaveSequencer};
