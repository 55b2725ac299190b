//! Ground column synthesis

use std::collections::HashSet;

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::core::grid::{snap_down, snap_up};
use crate::generation::{TERRAIN_STREAM, column_seed};
use crate::terrain::TerrainGenerator;
use crate::world::{Color, Tile, TileKind};

/// Emits vertical stacks of ground tiles per grid column.
///
/// Tracks which columns have already been generated, so overlapping or
/// re-issued range requests are idempotent: a column is materialized at
/// most once and the returned list contains only newly created tiles.
/// Columns are independent of each other by construction.
pub struct TerrainSynthesizer {
    tile_size: i32,
    depth: u32,
    seed: u32,
    generated: HashSet<i32>,
}

impl TerrainSynthesizer {
    pub fn new(tile_size: i32, depth: u32, seed: u32) -> Self {
        Self {
            tile_size,
            depth,
            seed,
            generated: HashSet::new(),
        }
    }

    /// Create ground tiles for every not-yet-generated column in
    /// `[min_x, max_x]`, snapped outward to the grid.
    ///
    /// An inverted range is treated as empty, and a range that lies fully
    /// inside already-generated territory yields an empty list rather than
    /// an error.
    pub fn create_in_range(
        &mut self,
        min_x: i32,
        max_x: i32,
        terrain: &TerrainGenerator,
    ) -> Vec<Tile> {
        let mut tiles = Vec::new();
        if min_x > max_x {
            return tiles;
        }

        let size = self.tile_size;
        let start = snap_down(min_x, size);
        let end = snap_up(max_x, size);

        for x in (start..=end).step_by(size as usize) {
            // Check-and-mark; a column is never regenerated.
            if !self.generated.insert(x) {
                continue;
            }

            let top_y = terrain.surface_y(x as f32, size);
            let mut rng = Pcg32::seed_from_u64(column_seed(x, self.seed, TERRAIN_STREAM));
            for i in 0..self.depth as i32 {
                let y = top_y + i * size;
                tiles.push(Tile::new(
                    IVec2::new(x, y),
                    TileKind::Ground,
                    Color::GROUND.approximate(&mut rng),
                ));
            }
        }
        tiles
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::TerrainParams;
    use std::collections::HashMap;

    fn terrain() -> TerrainGenerator {
        TerrainGenerator::new(TerrainParams::default())
    }

    fn synthesizer() -> TerrainSynthesizer {
        TerrainSynthesizer::new(30, 20, 12345)
    }

    #[test]
    fn test_columns_and_depth() {
        let terrain = terrain();
        let mut synth = synthesizer();

        let tiles = synth.create_in_range(0, 90, &terrain);

        // Columns 0, 30, 60, 90 with 20 tiles each.
        assert_eq!(tiles.len(), 4 * 20);
        assert_eq!(synth.generated_columns(), 4);

        let mut per_column: HashMap<i32, Vec<i32>> = HashMap::new();
        for tile in &tiles {
            assert_eq!(tile.kind, TileKind::Ground);
            assert!(tile.is_solid());
            per_column.entry(tile.origin.x).or_default().push(tile.origin.y);
        }

        for (x, ys) in per_column {
            let top = terrain.surface_y(x as f32, 30);
            for (i, y) in ys.iter().enumerate() {
                assert_eq!(*y, top + i as i32 * 30, "column {} stack broken", x);
            }
        }
    }

    #[test]
    fn test_range_is_snapped_outward() {
        let terrain = terrain();
        let mut synth = synthesizer();

        // 31..=59 covers grid columns 30 and 60 after snapping.
        let tiles = synth.create_in_range(31, 59, &terrain);
        let columns: HashSet<i32> = tiles.iter().map(|t| t.origin.x).collect();
        assert_eq!(columns, HashSet::from([30, 60]));
    }

    #[test]
    fn test_tiles_are_grid_aligned() {
        let terrain = terrain();
        let mut synth = synthesizer();

        for tile in synth.create_in_range(-305, 305, &terrain) {
            assert_eq!(tile.origin.x.rem_euclid(30), 0);
            assert_eq!(tile.origin.y.rem_euclid(30), 0);
        }
    }

    #[test]
    fn test_repeated_range_is_idempotent() {
        let terrain = terrain();
        let mut synth = synthesizer();

        let first = synth.create_in_range(0, 300, &terrain);
        assert!(!first.is_empty());

        let second = synth.create_in_range(0, 300, &terrain);
        assert!(second.is_empty(), "re-issued range must create nothing");
    }

    #[test]
    fn test_overlapping_ranges_do_not_duplicate() {
        let terrain = terrain();
        let mut synth = synthesizer();

        let mut tiles = synth.create_in_range(0, 300, &terrain);
        tiles.extend(synth.create_in_range(150, 450, &terrain));

        let mut origins: Vec<IVec2> = tiles.iter().map(|t| t.origin).collect();
        let total = origins.len();
        origins.sort_by_key(|o| (o.x, o.y));
        origins.dedup();
        assert_eq!(origins.len(), total, "duplicate tiles emitted");
    }

    #[test]
    fn test_chunked_union_matches_single_call() {
        let terrain = terrain();

        let mut whole = synthesizer();
        let mut tiles_whole = whole.create_in_range(-300, 600, &terrain);

        let mut chunked = synthesizer();
        let mut tiles_chunked = chunked.create_in_range(90, 600, &terrain);
        tiles_chunked.extend(chunked.create_in_range(-300, 120, &terrain));

        let key = |t: &Tile| (t.origin.x, t.origin.y);
        tiles_whole.sort_by_key(key);
        tiles_chunked.sort_by_key(key);
        assert_eq!(tiles_whole, tiles_chunked);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let terrain = terrain();
        let mut synth = synthesizer();
        assert!(synth.create_in_range(300, 0, &terrain).is_empty());
        assert_eq!(synth.generated_columns(), 0);
    }

    #[test]
    fn test_negative_columns() {
        let terrain = terrain();
        let mut synth = synthesizer();

        let tiles = synth.create_in_range(-95, -5, &terrain);
        let columns: HashSet<i32> = tiles.iter().map(|t| t.origin.x).collect();
        assert_eq!(columns, HashSet::from([-120, -90, -60, -30, 0]));
        assert!(synth.is_generated(-120));
    }

    #[test]
    fn test_column_colors_are_order_independent() {
        let terrain = terrain();

        let mut a = synthesizer();
        a.create_in_range(0, 0, &terrain);
        let column = a.create_in_range(60, 60, &terrain);

        let mut b = synthesizer();
        let column_again = b.create_in_range(60, 60, &terrain);

        assert_eq!(column, column_again);
    }
}
