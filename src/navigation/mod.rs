//! Navigable surface and ground collaborators
//!
//! The navmesh itself is built outside this crate. This module defines the
//! interfaces the spawner consumes and the timer that schedules rebuilds.

pub mod surface;
pub mod rebuild;

pub use surface::{FlatGround, GroundProbe, NavigableSurface, NoGround, NoNavigation};
pub use rebuild::{NavMeshRebuildConfig, NavMeshRebuilder, MIN_REBUILD_RADIUS};
