//! Error types for the tankworld runtime

use thiserror::Error;

use crate::spawning::prototype::PrototypeId;

/// Main error type for the world and spawning systems
///
/// Only configuration and handle-misuse problems surface here. Placement
/// fallbacks (missing spawn areas, failed ground snaps) are recovered where
/// they happen and only logged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown prototype {0:?}")]
    UnknownPrototype(PrototypeId),

    #[error("Entity {0:?} is not an active entity of this pool registry")]
    ForeignEntity(hecs::Entity),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for building a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }
}
