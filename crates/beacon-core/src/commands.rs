//! Player commands sent from the presentation layer to the simulation.
//!
//! Each variant maps onto one engine action; a serialized command stream
//! is enough to replay a game against the same seed.

use serde::{Deserialize, Serialize};

use crate::enums::Direction;

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement ---
    /// Step the player one cell and turn it to face that way.
    Move { direction: Direction },

    // --- Combat ---
    /// Fire at the nearest enemy within shooting range.
    Shoot,

    // --- Construction and economy ---
    /// Place a barricade on the player's cell.
    BuildBarricade,
    /// Collect from whichever harvest zones contain the player head.
    Harvest,
    /// Spend wood and metal to restore beacon health.
    RepairBeacon,
    /// Convert wood, metal, and stone into ammunition.
    CreateAmmo,
}
