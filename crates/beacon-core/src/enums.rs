//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{METAL_HARVEST_AMOUNT, STONE_HARVEST_AMOUNT, WOOD_HARVEST_AMOUNT};

/// Facing and movement direction of the player unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    /// Initial facing at game start.
    #[default]
    Right,
}

/// The three harvestable construction resources. Ammunition is produced
/// from these, never harvested, and is tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    Wood,
    Stone,
    Metal,
}

impl ResourceKind {
    /// Zone-check order for the harvest action.
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Wood,
        ResourceKind::Stone,
        ResourceKind::Metal,
    ];

    /// Amount gained per harvest action inside this resource's zone.
    pub fn harvest_amount(&self) -> i32 {
        match self {
            ResourceKind::Wood => WOOD_HARVEST_AMOUNT,
            ResourceKind::Stone => STONE_HARVEST_AMOUNT,
            ResourceKind::Metal => METAL_HARVEST_AMOUNT,
        }
    }
}
