//! World entity records: tiles, fruit, and their layer routing
//!
//! Entities are plain tagged records; the rendering/physics collaborator
//! consumes them through the {origin, solidity, visibility, layer}
//! interface and owns everything visual.

use glam::IVec2;

use super::color::Color;

/// Role of a tile in the world
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    Ground,
    Trunk,
    Leaf,
}

/// Insertion layer for the rendering/physics collaborator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Solid static geometry (ground, trunks).
    Static,
    /// Non-solid decorative foliage, drawn above static geometry.
    Foliage,
    /// Interactive objects (fruit).
    Default,
}

/// Axis-aligned square cell of fixed edge length, grid-aligned on both axes.
///
/// Never mutated after creation; leaf sway animation is the rendering
/// collaborator's transient state, not part of the tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Grid-aligned top-left corner.
    pub origin: IVec2,
    pub kind: TileKind,
    /// Cosmetic appearance variant.
    pub color: Color,
}

impl Tile {
    pub fn new(origin: IVec2, kind: TileKind, color: Color) -> Self {
        Self { origin, kind, color }
    }

    /// Ground and trunk tiles are solid and immovable; leaves are not.
    pub fn is_solid(&self) -> bool {
        !matches!(self.kind, TileKind::Leaf)
    }
}

/// A collectible fruit cell.
///
/// Created once during flora synthesis and never destroyed: collection
/// hides the fruit and starts the respawn timer, `tick` drives the timer
/// and restores visibility. The collision collaborator calls [`collect`]
/// on avatar contact.
///
/// [`collect`]: Fruit::collect
#[derive(Clone, Debug, PartialEq)]
pub struct Fruit {
    /// Grid-aligned cell position.
    pub origin: IVec2,
    visible: bool,
    respawn_timer: Option<f32>,
    respawn_secs: f32,
}

impl Fruit {
    /// Energy granted to the avatar per collection.
    pub const ENERGY_GAIN: f32 = 10.0;

    pub fn new(origin: IVec2, respawn_secs: f32) -> Self {
        Self {
            origin,
            visible: true,
            respawn_timer: None,
            respawn_secs,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Collect the fruit. Returns the energy gained, or `None` if the
    /// fruit is currently hidden and waiting to respawn.
    pub fn collect(&mut self) -> Option<f32> {
        if !self.visible {
            return None;
        }
        self.visible = false;
        self.respawn_timer = Some(self.respawn_secs);
        Some(Self::ENERGY_GAIN)
    }

    /// Advance the respawn timer by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        if let Some(remaining) = &mut self.respawn_timer {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.respawn_timer = None;
                self.visible = true;
            }
        }
    }
}

/// A generated world entity
#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    Tile(Tile),
    Fruit(Fruit),
}

impl Entity {
    /// Grid-aligned top-left corner.
    pub fn origin(&self) -> IVec2 {
        match self {
            Entity::Tile(tile) => tile.origin,
            Entity::Fruit(fruit) => fruit.origin,
        }
    }

    pub fn is_solid(&self) -> bool {
        match self {
            Entity::Tile(tile) => tile.is_solid(),
            Entity::Fruit(_) => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        match self {
            Entity::Tile(_) => true,
            Entity::Fruit(fruit) => fruit.is_visible(),
        }
    }

    /// Layer the entity should be inserted into.
    pub fn layer(&self) -> Layer {
        match self {
            Entity::Tile(tile) => match tile.kind {
                TileKind::Ground | TileKind::Trunk => Layer::Static,
                TileKind::Leaf => Layer::Foliage,
            },
            Entity::Fruit(_) => Layer::Default,
        }
    }
}
