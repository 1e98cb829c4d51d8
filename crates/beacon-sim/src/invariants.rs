//! State invariants - sanity checks that detect bugs.
//!
//! A correctly implemented engine never produces a violation: the
//! systems clamp every counter and position before committing it. The
//! engine sweeps these after each advance in debug builds, and the
//! tests sweep them after scripted games.

use beacon_core::constants::{
    CELL_SIZE, ENEMY_SIZE, MAX_AMMO, MAX_BEACON_HEALTH, MAX_RESOURCES, PLAYER_SIZE,
};
use beacon_core::types::Position;

use crate::state::SimState;

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all state invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
/// These are bug detectors, not gameplay limits.
#[must_use]
pub fn check_invariants(state: &SimState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    // Stock bounds
    let stocks = [
        ("wood", state.resources.wood, MAX_RESOURCES),
        ("metal", state.resources.metal, MAX_RESOURCES),
        ("stone", state.resources.stone, MAX_RESOURCES),
        ("ammo", state.resources.ammo, MAX_AMMO),
    ];
    for (name, value, max) in stocks {
        if value < 0 || value > max {
            violations.push(InvariantViolation {
                message: format!("{name} stock {value} outside [0, {max}]"),
            });
        }
    }

    // Beacon health bounds
    if state.beacon_health < 0 || state.beacon_health > MAX_BEACON_HEALTH {
        violations.push(InvariantViolation {
            message: format!(
                "beacon health {} outside [0, {MAX_BEACON_HEALTH}]",
                state.beacon_health
            ),
        });
    }

    // Player inside the field, and on the grid except where the field
    // clamp pins an axis against the far bound
    if let Some(player) = &state.player {
        let max_x = (state.geometry.field_width - PLAYER_SIZE).max(0);
        let max_y = (state.geometry.field_height - PLAYER_SIZE).max(0);
        let Position { x, y } = player.position;
        if x < 0 || x > max_x || y < 0 || y > max_y {
            violations.push(InvariantViolation {
                message: format!("player at ({x}, {y}) outside the field"),
            });
        }
        let off_grid = |v: i32, max: i32| v % CELL_SIZE != 0 && v != max;
        if off_grid(x, max_x) || off_grid(y, max_y) {
            violations.push(InvariantViolation {
                message: format!("player at ({x}, {y}) off the cell grid"),
            });
        }
    }

    // Barricades: positive health, one per cell
    for (index, barricade) in state.barricades.iter().enumerate() {
        if barricade.health <= 0 {
            violations.push(InvariantViolation {
                message: format!(
                    "barricade at {:?} standing with health {}",
                    barricade.position, barricade.health
                ),
            });
        }
        if state.barricades[..index]
            .iter()
            .any(|earlier| earlier.position == barricade.position)
        {
            violations.push(InvariantViolation {
                message: format!("two barricades share {:?}", barricade.position),
            });
        }
    }

    // Enemies inside the field
    let enemy_max_x = (state.geometry.field_width - ENEMY_SIZE).max(0);
    let enemy_max_y = (state.geometry.field_height - ENEMY_SIZE).max(0);
    for enemy in &state.enemies {
        if enemy.x < 0 || enemy.x > enemy_max_x || enemy.y < 0 || enemy.y > enemy_max_y {
            violations.push(InvariantViolation {
                message: format!("enemy at {enemy:?} outside the field"),
            });
        }
    }

    violations
}
