//! Cell coordinates on the chunk lattice

use glam::Vec3;

/// Integer coordinate identifying a chunk slot in the XZ grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct CellCoord {
    pub x: i32,
    pub z: i32,
}

impl CellCoord {
    pub const ORIGIN: CellCoord = CellCoord { x: 0, z: 0 };

    /// Create a new cell coordinate
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Convert a world position to the cell containing it
    pub fn from_world_pos(pos: Vec3, chunk_size: i32) -> Self {
        let size = chunk_size as f32;
        Self {
            x: (pos.x / size).floor() as i32,
            z: (pos.z / size).floor() as i32,
        }
    }

    /// World-space origin (minimum corner) of this cell
    pub fn world_origin(&self, chunk_size: i32) -> Vec3 {
        Vec3::new(
            self.x as f32 * chunk_size as f32,
            0.0,
            self.z as f32 * chunk_size as f32,
        )
    }

    /// Translate by a lattice offset
    pub fn offset(&self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }

    /// Squared lattice distance to another cell, widened to avoid overflow
    pub fn distance_squared(&self, other: CellCoord) -> i64 {
        let dx = self.x as i64 - other.x as i64;
        let dz = self.z as i64 - other.z as i64;
        dx * dx + dz * dz
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}
