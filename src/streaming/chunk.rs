//! Terrain chunk occupying one lattice cell

use glam::Vec3;

use super::coord::CellCoord;
use crate::terrain::TerrainMesh;

/// Generated terrain for one cell, positioned at `cell * chunk_size`
#[derive(Clone, Debug)]
pub struct Chunk {
    /// Cell this chunk occupies
    pub coord: CellCoord,
    /// World-space origin (minimum corner)
    pub origin: Vec3,
    /// Mesh buffers in chunk-local space
    pub mesh: TerrainMesh,
}

impl Chunk {
    /// Wrap a synthesized mesh for `coord`
    pub fn new(coord: CellCoord, chunk_size: i32, mesh: TerrainMesh) -> Self {
        Self {
            coord,
            origin: coord.world_origin(chunk_size),
            mesh,
        }
    }

    /// Get chunk coordinate
    pub fn coord(&self) -> CellCoord {
        self.coord
    }

    /// Debug name matching the scene naming of chunk objects
    pub fn name(&self) -> String {
        format!("Chunk_{}_{}", self.coord.x, self.coord.z)
    }

    /// Surface height at a world-space XZ position inside this chunk
    pub fn height_at_world(&self, x: f32, z: f32) -> Option<f32> {
        self.mesh
            .height_at_local(x - self.origin.x, z - self.origin.z)
            .map(|h| h + self.origin.y)
    }
}
