//! Registry of resident chunks
//!
//! Owns every live chunk, keyed by cell. The streamer is the only writer;
//! other code may read the active cell set between updates.

use std::collections::{HashMap, HashSet};

use super::chunk::Chunk;
use super::coord::CellCoord;

/// Map of cell coordinates to their resident chunk
#[derive(Debug, Default)]
pub struct ChunkRegistry {
    chunks: HashMap<CellCoord, Chunk>,
}

impl ChunkRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a chunk under its own coordinate
    ///
    /// # Returns
    /// False (and drops nothing already registered) if the cell is occupied
    pub fn insert(&mut self, chunk: Chunk) -> bool {
        let coord = chunk.coord;
        if self.chunks.contains_key(&coord) {
            log::warn!("Refusing duplicate chunk at {}", coord);
            return false;
        }
        self.chunks.insert(coord, chunk);
        true
    }

    /// Unregister a chunk, handing ownership back to the caller
    pub fn remove(&mut self, coord: CellCoord) -> Option<Chunk> {
        self.chunks.remove(&coord)
    }

    /// Check if a cell has a resident chunk
    pub fn contains(&self, coord: CellCoord) -> bool {
        self.chunks.contains_key(&coord)
    }

    /// Get the chunk at a cell
    pub fn get(&self, coord: CellCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Iterator over resident cells
    pub fn cells(&self) -> impl Iterator<Item = &CellCoord> {
        self.chunks.keys()
    }

    /// Snapshot of resident cells
    pub fn active_cells(&self) -> HashSet<CellCoord> {
        self.chunks.keys().copied().collect()
    }

    /// Iterator over resident chunks
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.values()
    }

    /// Number of resident chunks
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether no chunks are resident
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Drop every chunk, returning the cells that were resident
    pub fn clear(&mut self) -> Vec<CellCoord> {
        let cells: Vec<CellCoord> = self.chunks.keys().copied().collect();
        self.chunks.clear();
        cells
    }
}
