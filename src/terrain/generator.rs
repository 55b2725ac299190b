//! Noise-based ground height field

use serde::{Deserialize, Serialize};

use super::noise::HeightNoise;
use crate::core::grid::snap_down_f32;

/// Parameters controlling the ground height field
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TerrainParams {
    /// Seed for the height noise.
    pub seed: u32,
    /// Ground elevation at zero noise, in screen-space world units
    /// (y grows downward).
    pub baseline: f32,
    /// Maximum noise offset above or below the baseline.
    pub amplitude: f32,
    /// Horizontal noise wavelength (larger = smoother terrain).
    pub scale: f32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            seed: 12345,
            baseline: 400.0,  // two thirds of a 600px-tall viewport
            amplitude: 210.0,
            scale: 210.0,     // seven tile widths
        }
    }
}

/// Deterministic ground height field.
///
/// Pure over its inputs: the same `x` always yields the same height, and
/// the function is callable at arbitrary real coordinates (the avatar
/// collaborator uses it to place the spawn point between grid columns).
pub struct TerrainGenerator {
    params: TerrainParams,
    noise: HeightNoise,
}

impl TerrainGenerator {
    /// Create a new height field with the given parameters
    pub fn new(params: TerrainParams) -> Self {
        let noise = HeightNoise::new(params.seed);
        Self { params, noise }
    }

    /// Get terrain parameters
    pub fn params(&self) -> &TerrainParams {
        &self.params
    }

    /// Ground height at world coordinate `x`.
    pub fn ground_height_at(&self, x: f32) -> f32 {
        self.params.baseline + self.noise.sample(x, self.params.scale) * self.params.amplitude
    }

    /// Grid-snapped top of the ground column at `x`.
    pub fn surface_y(&self, x: f32, tile_size: i32) -> i32 {
        snap_down_f32(self.ground_height_at(x), tile_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_params_default() {
        let params = TerrainParams::default();
        assert_eq!(params.seed, 12345);
        assert_eq!(params.baseline, 400.0);
        assert_eq!(params.amplitude, 210.0);
        assert_eq!(params.scale, 210.0);
    }

    #[test]
    fn test_ground_height_within_amplitude() {
        let generator = TerrainGenerator::new(TerrainParams::default());

        for i in -100..100 {
            let x = i as f32 * 30.0;
            let h = generator.ground_height_at(x);
            assert!(h >= 400.0 - 210.0, "height {} below bound at x={}", h, x);
            assert!(h <= 400.0 + 210.0, "height {} above bound at x={}", h, x);
        }
    }

    #[test]
    fn test_ground_height_at_origin() {
        // seed=12345, S=30, baseline=400: height at x=0 stays within one
        // noise amplitude of the baseline and repeats exactly.
        let generator = TerrainGenerator::new(TerrainParams::default());

        let h = generator.ground_height_at(0.0);
        assert!((400.0 - 210.0..=400.0 + 210.0).contains(&h));
        assert_eq!(h, generator.ground_height_at(0.0));
    }

    #[test]
    fn test_ground_height_consistency() {
        let generator = TerrainGenerator::new(TerrainParams::default());
        let positions = [0.0, 15.5, 100.0, -250.0, 12345.0];

        for x in positions {
            let h1 = generator.ground_height_at(x);
            let h2 = generator.ground_height_at(x);
            assert_eq!(h1, h2, "height should be consistent at {}", x);
        }
    }

    #[test]
    fn test_different_seeds_produce_different_terrain() {
        let gen1 = TerrainGenerator::new(TerrainParams { seed: 1, ..Default::default() });
        let gen2 = TerrainGenerator::new(TerrainParams { seed: 2, ..Default::default() });

        let differs = (1..20).any(|i| {
            let x = i as f32 * 31.0;
            gen1.ground_height_at(x) != gen2.ground_height_at(x)
        });
        assert!(differs);
    }

    #[test]
    fn test_surface_y_is_grid_aligned() {
        let generator = TerrainGenerator::new(TerrainParams::default());

        for i in -50..50 {
            let x = i as f32 * 30.0;
            let top = generator.surface_y(x, 30);
            assert_eq!(top % 30, 0);
            assert!(top as f32 <= generator.ground_height_at(x));
        }
    }
}
