//! Periodic damage: enemies at the beacon wear it down, enemies at
//! barricades tear those down.

use beacon_core::constants::{BEACON_FOOTPRINT_RADIUS, CELL_SIZE, ENEMY_DAMAGE};

use crate::state::SimState;

/// Structure step of one damage tick. Any enemy inside the beacon
/// footprint radius costs the beacon a single damage application, never
/// one per enemy. Health floors at zero. Returns true when the beacon is
/// destroyed.
pub fn apply_beacon_damage(state: &mut SimState) -> bool {
    let target = state.geometry.beacon_center();
    let radius_sq = i64::from(BEACON_FOOTPRINT_RADIUS) * i64::from(BEACON_FOOTPRINT_RADIUS);

    let breached = state
        .enemies
        .iter()
        .any(|enemy| enemy.distance_squared_to(&target) <= radius_sq);
    if breached {
        state.beacon_health = (state.beacon_health - ENEMY_DAMAGE).max(0);
    }
    state.beacon_health == 0
}

/// Barricade step of one damage tick. Each enemy hits the first
/// barricade in build order within its one-cell box. Removals are
/// deferred until the scan completes, so a barricade broken early in
/// the tick still absorbs the hits of later enemies.
pub fn apply_barricade_damage(state: &mut SimState) {
    let barricades = &mut state.barricades;
    for enemy in &state.enemies {
        if let Some(barricade) = barricades
            .iter_mut()
            .find(|barricade| enemy.within_box(&barricade.position, CELL_SIZE))
        {
            barricade.health -= ENEMY_DAMAGE;
        }
    }
    barricades.retain(|barricade| barricade.health > 0);
}
