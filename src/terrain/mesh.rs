//! Grid mesh synthesis for terrain chunks
//!
//! A chunk is a `(size + 1) x (size + 1)` vertex grid in chunk-local space,
//! stored row-major by z then x. Heights are sampled at world-aligned
//! positions so neighbouring chunks agree on their shared edge.

use std::borrow::Cow;

use glam::{Vec2, Vec3};

use super::generator::NoiseHeightField;
use crate::core::Result;
use crate::streaming::{CellCoord, WorldGenerationConfig};

/// Vertex, normal, UV and index buffers for one chunk
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TerrainMesh {
    /// Chunk-local positions `(x, height, z)`
    pub vertices: Vec<Vec3>,
    /// Smooth per-vertex normals
    pub normals: Vec<Vec3>,
    /// Texture coordinates in `[0, 1]`
    pub uvs: Vec<Vec2>,
    /// Triangle list, three indices per face
    pub triangles: Vec<u32>,
    /// Number of grid cells along each side
    size: u32,
}

impl TerrainMesh {
    /// Grid cells per side
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Vertices per grid row
    #[inline]
    pub fn row_stride(&self) -> u32 {
        self.size + 1
    }

    /// Index of the grid vertex at `(x, z)`
    #[inline]
    pub fn vertex_index(&self, x: u32, z: u32) -> usize {
        (z * self.row_stride() + x) as usize
    }

    /// Height of the grid vertex at `(x, z)`
    pub fn grid_height(&self, x: u32, z: u32) -> f32 {
        self.vertices[self.vertex_index(x, z)].y
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Surface height on the triangulated mesh at chunk-local `(x, z)`.
    ///
    /// Returns `None` outside the chunk footprint.
    pub fn height_at_local(&self, x: f32, z: f32) -> Option<f32> {
        let size = self.size as f32;
        if self.size == 0 || !(0.0..=size).contains(&x) || !(0.0..=size).contains(&z) {
            return None;
        }

        let cx = (x.floor() as u32).min(self.size - 1);
        let cz = (z.floor() as u32).min(self.size - 1);
        let fx = x - cx as f32;
        let fz = z - cz as f32;

        let h00 = self.grid_height(cx, cz);
        let h10 = self.grid_height(cx + 1, cz);
        let h01 = self.grid_height(cx, cz + 1);
        let h11 = self.grid_height(cx + 1, cz + 1);

        // The quad is split along the (x+1, z) - (x, z+1) diagonal
        let h = if fx + fz <= 1.0 {
            h00 + fx * (h10 - h00) + fz * (h01 - h00)
        } else {
            h11 + (1.0 - fx) * (h01 - h11) + (1.0 - fz) * (h10 - h11)
        };
        Some(h)
    }

    /// Raw vertex positions for upload to a renderer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw triangle indices for upload to a renderer
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.triangles)
    }

    /// Recompute smooth normals from the triangle list.
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.vertices.len()];

        for tri in self.triangles.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            let face = (self.vertices[b] - self.vertices[a])
                .cross(self.vertices[c] - self.vertices[a]);
            normals[a] += face;
            normals[b] += face;
            normals[c] += face;
        }

        for n in normals.iter_mut() {
            *n = n.normalize_or_zero();
        }
        self.normals = normals;
    }
}

/// Builds chunk meshes from a noise height field
#[derive(Clone, Debug)]
pub struct TerrainMeshSynthesizer {
    field: NoiseHeightField,
}

impl TerrainMeshSynthesizer {
    /// Create a synthesizer for a validated world configuration
    pub fn new(config: &WorldGenerationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            field: NoiseHeightField::new(config.world_seed),
        })
    }

    /// Height field backing this synthesizer
    pub fn field(&self) -> &NoiseHeightField {
        &self.field
    }

    /// Generate the mesh for one cell.
    ///
    /// Deterministic in `(cell, config)`. The config must have passed
    /// `validate()`.
    pub fn generate_chunk(&self, cell: CellCoord, config: &WorldGenerationConfig) -> TerrainMesh {
        debug_assert!(config.chunk_size > 0);
        let size = config.chunk_size.max(1) as u32;
        let field = self.field_for(config.world_seed);

        let x_offset = (cell.x as i64 * config.chunk_size as i64) as f32;
        let z_offset = (cell.z as i64 * config.chunk_size as i64) as f32;

        let vertices = Self::build_vertices(&field, size, x_offset, z_offset, config);
        let triangles = Self::build_triangles(size);
        let uvs = Self::build_uvs(size);

        let mut mesh = TerrainMesh {
            vertices,
            normals: Vec::new(),
            uvs,
            triangles,
            size,
        };
        mesh.recalculate_normals();
        mesh
    }

    fn field_for(&self, seed: u32) -> Cow<'_, NoiseHeightField> {
        if seed == self.field.seed() {
            Cow::Borrowed(&self.field)
        } else {
            log::debug!("Synthesizer seed {} differs from config seed {}", self.field.seed(), seed);
            Cow::Owned(NoiseHeightField::new(seed))
        }
    }

    fn build_vertices(
        field: &NoiseHeightField,
        size: u32,
        x_offset: f32,
        z_offset: f32,
        config: &WorldGenerationConfig,
    ) -> Vec<Vec3> {
        let stride = (size + 1) as usize;
        let mut vertices = Vec::with_capacity(stride * stride);

        for z in 0..=size {
            for x in 0..=size {
                let nx = (x as f32 + x_offset) * config.noise_scale;
                let nz = (z as f32 + z_offset) * config.noise_scale;
                let y = field.sample(nx, nz) * config.height_scale;
                vertices.push(Vec3::new(x as f32, y, z as f32));
            }
        }

        vertices
    }

    fn build_triangles(size: u32) -> Vec<u32> {
        let row = size + 1;
        let mut triangles = Vec::with_capacity((size * size * 6) as usize);

        for z in 0..size {
            for x in 0..size {
                let v = z * row + x;

                triangles.extend_from_slice(&[v, v + row, v + 1]);
                triangles.extend_from_slice(&[v + 1, v + row, v + row + 1]);
            }
        }

        triangles
    }

    fn build_uvs(size: u32) -> Vec<Vec2> {
        let stride = (size + 1) as usize;
        let mut uvs = Vec::with_capacity(stride * stride);

        for z in 0..=size {
            for x in 0..=size {
                uvs.push(Vec2::new(x as f32 / size as f32, z as f32 / size as f32));
            }
        }

        uvs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(chunk_size: i32) -> WorldGenerationConfig {
        WorldGenerationConfig {
            chunk_size,
            world_seed: 4242,
            height_scale: 6.0,
            noise_scale: 0.13,
            ..Default::default()
        }
    }

    #[test]
    fn test_buffer_sizes() {
        let config = config(20);
        let synth = TerrainMeshSynthesizer::new(&config).unwrap();
        let mesh = synth.generate_chunk(CellCoord::ORIGIN, &config);

        assert_eq!(mesh.size(), 20);
        assert_eq!(mesh.vertices.len(), 21 * 21);
        assert_eq!(mesh.uvs.len(), 21 * 21);
        assert_eq!(mesh.normals.len(), 21 * 21);
        assert_eq!(mesh.triangles.len(), 20 * 20 * 6);
        assert_eq!(mesh.triangle_count(), 800);
        assert_eq!(mesh.vertex_bytes().len(), 21 * 21 * 12);
        assert_eq!(mesh.index_bytes().len(), 20 * 20 * 6 * 4);
    }

    #[test]
    fn test_first_quad_indices() {
        let config = config(4);
        let synth = TerrainMeshSynthesizer::new(&config).unwrap();
        let mesh = synth.generate_chunk(CellCoord::ORIGIN, &config);

        assert_eq!(&mesh.triangles[0..6], &[0, 5, 1, 1, 5, 6]);
        // Second row starts one vertex later (row stride is size + 1)
        let second_row = 4 * 6;
        assert_eq!(&mesh.triangles[second_row..second_row + 3], &[5, 10, 6]);
    }

    #[test]
    fn test_winding_faces_up() {
        let flat = WorldGenerationConfig { height_scale: 0.0, ..config(3) };
        let synth = TerrainMeshSynthesizer::new(&flat).unwrap();
        let mesh = synth.generate_chunk(CellCoord::new(2, -1), &flat);

        for tri in mesh.triangles.chunks_exact(3) {
            let a = mesh.vertices[tri[0] as usize];
            let b = mesh.vertices[tri[1] as usize];
            let c = mesh.vertices[tri[2] as usize];
            let n = (b - a).cross(c - a);
            assert!(n.y > 0.0, "face normal should point up, got {:?}", n);
        }
        for n in &mesh.normals {
            assert!((n.y - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_uvs() {
        let config = config(10);
        let synth = TerrainMeshSynthesizer::new(&config).unwrap();
        let mesh = synth.generate_chunk(CellCoord::ORIGIN, &config);

        assert_eq!(mesh.uvs[0], Vec2::ZERO);
        assert_eq!(mesh.uvs[mesh.vertex_index(10, 10)], Vec2::ONE);
        assert_eq!(mesh.uvs[mesh.vertex_index(5, 2)], Vec2::new(0.5, 0.2));
    }

    #[test]
    fn test_deterministic_heights() {
        let config = config(16);
        let synth = TerrainMeshSynthesizer::new(&config).unwrap();
        let cell = CellCoord::new(-3, 7);

        let a = synth.generate_chunk(cell, &config);
        let b = synth.generate_chunk(cell, &config);

        let bits_a: Vec<u32> = a.vertices.iter().map(|v| v.y.to_bits()).collect();
        let bits_b: Vec<u32> = b.vertices.iter().map(|v| v.y.to_bits()).collect();
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn test_seam_continuity_along_x() {
        let config = config(20);
        let synth = TerrainMeshSynthesizer::new(&config).unwrap();
        let left = synth.generate_chunk(CellCoord::new(0, 0), &config);
        let right = synth.generate_chunk(CellCoord::new(1, 0), &config);

        for z in 0..=20 {
            let a = left.grid_height(20, z);
            let b = right.grid_height(0, z);
            assert!((a - b).abs() < 1e-5, "seam mismatch at z={}: {} vs {}", z, a, b);
        }
    }

    #[test]
    fn test_seam_continuity_along_z_negative_cells() {
        let config = config(8);
        let synth = TerrainMeshSynthesizer::new(&config).unwrap();
        let below = synth.generate_chunk(CellCoord::new(-2, -1), &config);
        let above = synth.generate_chunk(CellCoord::new(-2, 0), &config);

        for x in 0..=8 {
            let a = below.grid_height(x, 8);
            let b = above.grid_height(x, 0);
            assert!((a - b).abs() < 1e-5, "seam mismatch at x={}: {} vs {}", x, a, b);
        }
    }

    #[test]
    fn test_heights_match_field() {
        let config = config(8);
        let synth = TerrainMeshSynthesizer::new(&config).unwrap();
        let mesh = synth.generate_chunk(CellCoord::new(1, 2), &config);

        let expected = synth.field().height_at(8.0 + 3.0, 16.0 + 5.0, config.noise_scale, config.height_scale);
        assert!((mesh.grid_height(3, 5) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_height_at_local_interpolates() {
        let config = config(4);
        let synth = TerrainMeshSynthesizer::new(&config).unwrap();
        let mesh = synth.generate_chunk(CellCoord::ORIGIN, &config);

        // Grid points are exact
        assert_eq!(mesh.height_at_local(2.0, 3.0), Some(mesh.grid_height(2, 3)));
        assert_eq!(mesh.height_at_local(4.0, 4.0), Some(mesh.grid_height(4, 4)));

        // Midpoint of the shared diagonal lies on both triangles
        let mid = mesh.height_at_local(1.5, 0.5).unwrap();
        let expected = (mesh.grid_height(2, 0) + mesh.grid_height(1, 1)) * 0.5;
        assert!((mid - expected).abs() < 1e-5);

        assert_eq!(mesh.height_at_local(-0.1, 1.0), None);
        assert_eq!(mesh.height_at_local(1.0, 4.01), None);
    }

    #[test]
    fn test_config_mismatch_uses_config_seed() {
        let base = config(6);
        let synth = TerrainMeshSynthesizer::new(&base).unwrap();
        let other = WorldGenerationConfig { world_seed: 17, ..base.clone() };
        let other_synth = TerrainMeshSynthesizer::new(&other).unwrap();

        let cell = CellCoord::new(3, 3);
        assert_eq!(synth.generate_chunk(cell, &other), other_synth.generate_chunk(cell, &other));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let bad = WorldGenerationConfig { chunk_size: 0, ..Default::default() };
        assert!(TerrainMeshSynthesizer::new(&bad).is_err());
    }
}
