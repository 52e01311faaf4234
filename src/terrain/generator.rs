//! Noise-based height field for procedural terrain

use noise::{NoiseFn, Perlin};

/// Deterministic 2D coherent-noise height function.
///
/// Samples are in world-aligned noise space, so two chunks that share an
/// edge sample identical coordinates along it.
#[derive(Clone)]
pub struct NoiseHeightField {
    seed: u32,
    noise: Perlin,
}

impl NoiseHeightField {
    /// Create a height field for the given world seed
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            noise: Perlin::new(seed),
        }
    }

    /// Seed this field was built from
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Raw noise in `[0, 1]` at noise-space coordinates `(x, z)`
    pub fn sample(&self, x: f32, z: f32) -> f32 {
        let value = self.noise.get([x as f64, z as f64]);
        ((value + 1.0) * 0.5).clamp(0.0, 1.0) as f32
    }

    /// Terrain height at world position `(x, z)`
    pub fn height_at(&self, x: f32, z: f32, noise_scale: f32, height_scale: f32) -> f32 {
        self.sample(x * noise_scale, z * noise_scale) * height_scale
    }
}

impl std::fmt::Debug for NoiseHeightField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseHeightField")
            .field("seed", &self.seed)
            .finish()
    }
}
