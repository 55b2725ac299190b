//! Incremental world materialization around a moving viewpoint

pub mod streamer;

pub use streamer::{UpdateOutcome, WorldStreamer};
