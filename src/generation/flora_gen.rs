//! Vegetation synthesis: trunks, foliage, and collectible fruit

use std::collections::HashSet;

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::core::grid::{snap_down, snap_up};
use crate::generation::{FLORA_STREAM, column_seed};
use crate::terrain::TerrainGenerator;
use crate::world::{Color, Entity, Fruit, Tile, TileKind};

/// Parameters controlling vegetation placement
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FloraParams {
    /// Probability that a grid column hosts a tree.
    pub tree_probability: f32,
    /// Minimum trunk height in tiles (inclusive).
    pub min_tree_height: u32,
    /// Maximum trunk height in tiles (exclusive).
    pub max_tree_height: u32,
    /// Canopy half-width in tiles around the trunk top.
    pub canopy_radius: i32,
    /// Per-cell emptiness threshold; a draw above it yields foliage.
    pub leaf_sparsity: f32,
    /// Per-cell probability of a fruit.
    pub fruit_probability: f32,
    /// Seconds until a collected fruit reappears (one day-night cycle).
    pub fruit_respawn_secs: f32,
}

impl Default for FloraParams {
    fn default() -> Self {
        Self {
            tree_probability: 0.1,
            min_tree_height: 4,
            max_tree_height: 12,
            canopy_radius: 2,
            leaf_sparsity: 0.3,
            fruit_probability: 0.1,
            fruit_respawn_secs: 30.0,
        }
    }
}

/// Deterministic tree placement anchored to the height field.
///
/// Every column derives its own generator state from the column coordinate
/// and the world seed, so a column's tree is identical no matter when, or
/// in what order relative to other columns, it is generated. The same
/// membership discipline as terrain makes overlapping requests idempotent.
pub struct FloraSynthesizer {
    tile_size: i32,
    seed: u32,
    params: FloraParams,
    generated: HashSet<i32>,
}

impl FloraSynthesizer {
    pub fn new(tile_size: i32, seed: u32, params: FloraParams) -> Self {
        Self {
            tile_size,
            seed,
            params,
            generated: HashSet::new(),
        }
    }

    pub fn params(&self) -> &FloraParams {
        &self.params
    }

    /// Create flora entities for every not-yet-generated column in
    /// `[min_x, max_x]`, snapped outward to the grid.
    ///
    /// Inverted ranges and ranges lying fully inside generated territory
    /// yield an empty list, never an error.
    pub fn create_in_range(
        &mut self,
        min_x: i32,
        max_x: i32,
        terrain: &TerrainGenerator,
    ) -> Vec<Entity> {
        let mut entities = Vec::new();
        if min_x > max_x {
            return entities;
        }

        let size = self.tile_size;
        let start = snap_down(min_x, size);
        let end = snap_up(max_x, size);

        for x in (start..=end).step_by(size as usize) {
            if !self.generated.insert(x) {
                continue;
            }

            let mut rng = Pcg32::seed_from_u64(column_seed(x, self.seed, FLORA_STREAM));
            if rng.gen_range(0.0..1.0_f32) < self.params.tree_probability {
                self.create_tree(x, terrain, &mut rng, &mut entities);
            }
        }
        entities
    }

    /// Emit one tree: a trunk stacked upward from the ground column, then a
    /// square canopy of foliage and fruit around the trunk top.
    fn create_tree(
        &self,
        x: i32,
        terrain: &TerrainGenerator,
        rng: &mut Pcg32,
        entities: &mut Vec<Entity>,
    ) {
        let size = self.tile_size;
        let ground_y = terrain.surface_y(x as f32, size);
        let height = rng.gen_range(self.params.min_tree_height..self.params.max_tree_height) as i32;
        let trunk_top_y = ground_y - height * size;

        for i in 0..height {
            let y = ground_y - i * size - size;
            entities.push(Entity::Tile(Tile::new(
                IVec2::new(x, y),
                TileKind::Trunk,
                Color::TRUNK.approximate(rng),
            )));
        }

        let radius = self.params.canopy_radius;
        for i in -radius..=radius {
            for j in -radius..=radius {
                let cell = IVec2::new(x + i * size, trunk_top_y + j * size);

                // The draw is on emptiness: exceeding the threshold yields a leaf.
                if rng.gen_range(0.0..1.0_f32) > self.params.leaf_sparsity {
                    entities.push(Entity::Tile(Tile::new(
                        cell,
                        TileKind::Leaf,
                        Color::LEAF.approximate(rng),
                    )));
                }

                // Independent draw; a cell may hold both a leaf and a fruit.
                if rng.gen_range(0.0..1.0_f32) < self.params.fruit_probability {
                    entities.push(Entity::Fruit(Fruit::new(cell, self.params.fruit_respawn_secs)));
                }
            }
        }
    }

    /// Whether the column at `x` has already been generated.
    pub fn is_generated(&self, x: i32) -> bool {
        self.generated.contains(&x)
    }

    /// Number of columns generated so far.
    pub fn generated_columns(&self) -> usize {
        self.generated.len()
    }
}
