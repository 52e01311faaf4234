//! Chunk loading footprints around a center cell

use std::collections::HashSet;

use super::coord::CellCoord;

/// Decides which cells should be resident around a center cell
pub trait ChunkLoadingStrategy: Send + Sync {
    /// Target set of cells to keep loaded. Pure and deterministic.
    fn chunks_to_load(&self, center: CellCoord, radius: i32) -> HashSet<CellCoord>;
}

/// Circular footprint: every lattice cell within Euclidean distance `radius`
#[derive(Clone, Copy, Debug, Default)]
pub struct CircularLoading;

impl ChunkLoadingStrategy for CircularLoading {
    fn chunks_to_load(&self, center: CellCoord, radius: i32) -> HashSet<CellCoord> {
        if radius < 0 {
            return HashSet::new();
        }

        let r_sq = radius as i64 * radius as i64;
        let side = 2 * radius as usize + 1;
        let mut cells = HashSet::with_capacity(side * side);

        for dx in -radius..=radius {
            for dz in -radius..=radius {
                // Integer form of sqrt(dx^2 + dz^2) <= radius
                if (dx as i64 * dx as i64) + (dz as i64 * dz as i64) <= r_sq {
                    cells.insert(center.offset(dx, dz));
                }
            }
        }

        cells
    }
}
