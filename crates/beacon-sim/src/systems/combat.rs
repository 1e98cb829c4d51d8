//! Player-initiated ranged combat.

use beacon_core::constants::{AMMO_COST, SHOOTING_RANGE};

use crate::state::SimState;

/// Fire at the nearest enemy, by squared Euclidean distance from the
/// player head; among equidistant enemies the earliest-spawned wins. A
/// hit removes that enemy and spends [`AMMO_COST`]; a miss, an empty
/// field, or an empty magazine spends nothing. Returns true on a hit.
pub fn shoot(state: &mut SimState) -> bool {
    if state.enemies.is_empty() || state.resources.ammo < AMMO_COST {
        return false;
    }
    let head = match &state.player {
        Some(player) => player.position,
        None => return false,
    };

    let mut nearest = 0;
    let mut nearest_sq = i64::MAX;
    for (index, enemy) in state.enemies.iter().enumerate() {
        let distance_sq = head.distance_squared_to(enemy);
        if distance_sq < nearest_sq {
            nearest_sq = distance_sq;
            nearest = index;
        }
    }

    let range_sq = i64::from(SHOOTING_RANGE) * i64::from(SHOOTING_RANGE);
    if nearest_sq > range_sq {
        return false;
    }
    state.enemies.remove(nearest);
    state.resources.ammo -= AMMO_COST;
    true
}
