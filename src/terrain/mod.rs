//! Procedural terrain: height field and chunk mesh synthesis

pub mod generator;
pub use generator::NoiseHeightField;

pub mod mesh;
pub use mesh::{TerrainMesh, TerrainMeshSynthesizer};
