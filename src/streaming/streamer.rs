//! Range-tracking incremental world generator
//!
//! Tracks the horizontal interval that has already been materialized and
//! extends it, snapped to the tile grid, when the viewpoint approaches the
//! edge of generated content. Bounds never shrink, and each update does
//! work proportional to the newly crossed span only.

use log::{debug, warn};

use crate::core::grid::{snap_down, snap_up};
use crate::generation::{FloraSynthesizer, GenerationConfig, TerrainSynthesizer};
use crate::terrain::TerrainGenerator;
use crate::world::{Entity, WorldSink};

/// Result of one `prime` or `update` call
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub extended_left: bool,
    pub extended_right: bool,
    /// Entities successfully placed into the sink.
    pub placed: usize,
    /// Entities the sink rejected. Their columns stay marked generated.
    pub failed: usize,
}

/// Incremental world generator.
///
/// Owns the height field and both synthesizers; newly generated entities
/// are handed to the [`WorldSink`] collaborator in a stable order (terrain
/// before flora, column order, within-column emission order), so a replay
/// with the same seed and movement trace produces an identical sequence.
pub struct WorldStreamer {
    generator: TerrainGenerator,
    terrain: TerrainSynthesizer,
    flora: FloraSynthesizer,
    tile_size: i32,
    buffer_px: i32,
    generated_min_x: i32,
    generated_max_x: i32,
}

impl WorldStreamer {
    /// Create a streamer for the interval `[initial_min_x, initial_max_x]`
    /// (snapped outward to the grid). The initial interval is materialized
    /// by [`prime`](WorldStreamer::prime).
    pub fn new(
        config: &GenerationConfig,
        buffer_px: i32,
        initial_min_x: i32,
        initial_max_x: i32,
    ) -> Self {
        let size = config.tile_size;
        Self {
            generator: TerrainGenerator::new(config.terrain.clone()),
            terrain: TerrainSynthesizer::new(size, config.terrain_depth, config.seed),
            flora: FloraSynthesizer::new(size, config.seed, config.flora.clone()),
            tile_size: size,
            buffer_px,
            generated_min_x: snap_down(initial_min_x, size),
            generated_max_x: snap_up(initial_max_x, size),
        }
    }

    /// Materialize the initial interval. Call once before the first
    /// `update`; repeated calls add nothing thanks to column membership.
    pub fn prime(&mut self, sink: &mut dyn WorldSink) -> UpdateOutcome {
        let mut outcome = UpdateOutcome::default();
        self.generate_range(self.generated_min_x, self.generated_max_x, sink, &mut outcome);
        outcome
    }

    /// Extend the materialized interval to cover `viewpoint_x ± buffer_px`,
    /// snapped to the grid. Left extension is applied before right
    /// extension. Territory already materialized is never re-walked.
    pub fn update(&mut self, viewpoint_x: f32, sink: &mut dyn WorldSink) -> UpdateOutcome {
        let size = self.tile_size;
        let target_min = snap_down(viewpoint_x as i32 - self.buffer_px, size);
        let target_max = snap_up(viewpoint_x as i32 + self.buffer_px, size);
        let mut outcome = UpdateOutcome::default();

        if target_min < self.generated_min_x {
            self.generate_range(target_min, self.generated_min_x, sink, &mut outcome);
            self.generated_min_x = target_min;
            outcome.extended_left = true;
        }

        if target_max > self.generated_max_x {
            self.generate_range(self.generated_max_x, target_max, sink, &mut outcome);
            self.generated_max_x = target_max;
            outcome.extended_right = true;
        }

        outcome
    }

    fn generate_range(
        &mut self,
        min_x: i32,
        max_x: i32,
        sink: &mut dyn WorldSink,
        outcome: &mut UpdateOutcome,
    ) {
        debug!("generating range [{}, {}]", min_x, max_x);

        for tile in self.terrain.create_in_range(min_x, max_x, &self.generator) {
            Self::place(sink, Entity::Tile(tile), outcome);
        }
        for entity in self.flora.create_in_range(min_x, max_x, &self.generator) {
            Self::place(sink, entity, outcome);
        }
    }

    fn place(sink: &mut dyn WorldSink, entity: Entity, outcome: &mut UpdateOutcome) {
        let layer = entity.layer();
        match sink.place(entity, layer) {
            Ok(()) => outcome.placed += 1,
            Err(err) => {
                // Fatal for this entity only; the column stays generated.
                warn!("failed to place entity: {}", err);
                outcome.failed += 1;
            }
        }
    }

    /// Left edge of the materialized interval (grid-aligned, non-increasing).
    pub fn generated_min_x(&self) -> i32 {
        self.generated_min_x
    }

    /// Right edge of the materialized interval (grid-aligned, non-decreasing).
    pub fn generated_max_x(&self) -> i32 {
        self.generated_max_x
    }

    /// Ground height at `x`, for viewpoint/avatar placement.
    pub fn ground_height_at(&self, x: f32) -> f32 {
        self.generator.ground_height_at(x)
    }
}
