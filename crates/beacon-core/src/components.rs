//! Plain-data simulation components.
//!
//! Components carry no game logic. Systems read and mutate them; the
//! engine decides when.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{Direction, ResourceKind};
use crate::types::Position;

/// The player unit: one grid-snapped head cell plus a facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    pub facing: Direction,
}

impl Player {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            facing: Direction::default(),
        }
    }
}

/// A placed obstacle. The damage system removes it once health runs out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barricade {
    pub position: Position,
    pub health: i32,
}

impl Barricade {
    /// A fresh barricade at `position` with full health.
    pub fn new(position: Position) -> Self {
        Self {
            position,
            health: BARRICADE_HEALTH,
        }
    }
}

/// The four resource counters. Wood, metal, and stone share one ceiling;
/// ammunition has its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceStock {
    pub wood: i32,
    pub metal: i32,
    pub stone: i32,
    pub ammo: i32,
}

impl ResourceStock {
    /// Stock handed out at game start.
    pub fn initial() -> Self {
        Self {
            wood: INITIAL_WOOD,
            metal: INITIAL_METAL,
            stone: INITIAL_STONE,
            ammo: INITIAL_AMMO,
        }
    }

    /// Current count of one harvestable resource.
    pub fn counter(&self, kind: ResourceKind) -> i32 {
        match kind {
            ResourceKind::Wood => self.wood,
            ResourceKind::Stone => self.stone,
            ResourceKind::Metal => self.metal,
        }
    }

    /// Add to one harvestable resource, clamped at [`MAX_RESOURCES`].
    pub fn add_capped(&mut self, kind: ResourceKind, amount: i32) {
        let counter = match kind {
            ResourceKind::Wood => &mut self.wood,
            ResourceKind::Stone => &mut self.stone,
            ResourceKind::Metal => &mut self.metal,
        };
        *counter = (*counter + amount).min(MAX_RESOURCES);
    }

    /// True when the stock covers a wood/metal/stone cost triple.
    pub fn covers(&self, wood: i32, metal: i32, stone: i32) -> bool {
        self.wood >= wood && self.metal >= metal && self.stone >= stone
    }

    /// Deduct a cost triple. Callers check [`Self::covers`] first.
    pub fn spend(&mut self, wood: i32, metal: i32, stone: i32) {
        debug_assert!(self.covers(wood, metal, stone));
        self.wood -= wood;
        self.metal -= metal;
        self.stone -= stone;
    }
}
