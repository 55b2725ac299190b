//! Insertion seam between generation and the external world collection

use crate::core::Result;

use super::entity::{Entity, Fruit, Layer, Tile};

/// Receives newly generated entities.
///
/// Implemented by the rendering/physics collaborator. A placement failure
/// is fatal for that entity only: generation bookkeeping is unaffected and
/// the column is never retried.
pub trait WorldSink {
    /// Insert one entity into the given layer.
    fn place(&mut self, entity: Entity, layer: Layer) -> Result<()>;
}

/// Vec-backed world collection, the reference sink for tests and offline
/// generation. Preserves insertion order.
#[derive(Debug, Default, PartialEq)]
pub struct WorldCollection {
    entries: Vec<(Layer, Entity)>,
}

impl WorldCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Layer, Entity)> + '_ {
        self.entries.iter()
    }

    /// Number of entities placed into `layer`.
    pub fn layer_len(&self, layer: Layer) -> usize {
        self.entries.iter().filter(|(l, _)| *l == layer).count()
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.entries.iter().filter_map(|(_, e)| match e {
            Entity::Tile(tile) => Some(tile),
            _ => None,
        })
    }

    pub fn fruits(&self) -> impl Iterator<Item = &Fruit> + '_ {
        self.entries.iter().filter_map(|(_, e)| match e {
            Entity::Fruit(fruit) => Some(fruit),
            _ => None,
        })
    }
}

impl WorldSink for WorldCollection {
    fn place(&mut self, entity: Entity, layer: Layer) -> Result<()> {
        self.entries.push((layer, entity));
        Ok(())
    }
}
