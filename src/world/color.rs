//! Cosmetic color variation for generated tiles

use rand::Rng;

/// Maximum per-channel offset applied by [`Color::approximate`].
const APPROXIMATE_DELTA: i16 = 10;

/// 8-bit RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Base color of ground tiles.
    pub const GROUND: Self = Self::new(212, 123, 74);
    /// Base color of tree trunks.
    pub const TRUNK: Self = Self::new(100, 50, 20);
    /// Base color of foliage.
    pub const LEAF: Self = Self::new(50, 200, 30);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A slightly jittered variant of this color. Cosmetic only; the jitter
    /// draws come from the caller's deterministic column generator.
    pub fn approximate<R: Rng>(self, rng: &mut R) -> Self {
        Self {
            r: jitter(self.r, rng),
            g: jitter(self.g, rng),
            b: jitter(self.b, rng),
        }
    }
}

fn jitter<R: Rng>(channel: u8, rng: &mut R) -> u8 {
    let offset = rng.gen_range(-APPROXIMATE_DELTA..=APPROXIMATE_DELTA);
    (channel as i16 + offset).clamp(0, 255) as u8
}
