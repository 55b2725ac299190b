//! Procedural synthesis of terrain and flora columns

pub mod config;
pub mod flora_gen;
pub mod terrain_gen;

pub use config::GenerationConfig;
pub use flora_gen::{FloraParams, FloraSynthesizer};
pub use terrain_gen::TerrainSynthesizer;

/// RNG stream for terrain cosmetics.
pub(crate) const TERRAIN_STREAM: u64 = 0;
/// RNG stream for flora placement.
pub(crate) const FLORA_STREAM: u64 = 1;

/// Hash a grid column and the world seed into an RNG seed.
///
/// Column generation must not depend on the order columns are visited:
/// every column derives its own generator state from `(x, seed, stream)`
/// instead of advancing a shared sequential generator. The `stream`
/// separates draw sequences that would otherwise alias (terrain cosmetics
/// vs flora placement at the same column).
pub(crate) fn column_seed(x: i32, seed: u32, stream: u64) -> u64 {
    let mut h = (x as i64 as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    h ^= (seed as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F);
    h ^= stream.wrapping_mul(0x1656_67B1_9E37_79F9);
    h ^= h >> 33;
    h = h.wrapping_mul(0xFF51_AFD7_ED55_8CCD);
    h ^ (h >> 33)
}
