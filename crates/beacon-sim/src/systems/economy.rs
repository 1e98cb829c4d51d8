//! Resource actions: harvest, build, repair, produce ammunition.
//!
//! Every action is check-then-apply: it either applies in full or
//! declines without touching a single counter.

use beacon_core::components::Barricade;
use beacon_core::constants::*;
use beacon_core::enums::ResourceKind;

use crate::state::SimState;

/// Collect from every harvest zone containing the player head. Each zone
/// pays its own amount into its own counter, clamped at the shared
/// ceiling. Returns true when the player stood in at least one zone,
/// even if the counter was already full.
pub fn harvest(state: &mut SimState) -> bool {
    let head = match &state.player {
        Some(player) => player.position,
        None => return false,
    };

    let mut in_any_zone = false;
    for kind in ResourceKind::ALL {
        if state.geometry.zone(kind).contains(&head) {
            state.resources.add_capped(kind, kind.harvest_amount());
            in_any_zone = true;
        }
    }
    in_any_zone
}

/// Place a barricade on the player's cell. Requires the full cost triple
/// and an unoccupied cell. Returns true when placed.
pub fn build_barricade(state: &mut SimState) -> bool {
    let site = match &state.player {
        Some(player) => player.position,
        None => return false,
    };

    if !state
        .resources
        .covers(WOOD_BARRICADE_COST, METAL_BARRICADE_COST, STONE_BARRICADE_COST)
    {
        return false;
    }
    if state
        .barricades
        .iter()
        .any(|barricade| barricade.position == site)
    {
        return false;
    }

    state.barricades.push(Barricade::new(site));
    state
        .resources
        .spend(WOOD_BARRICADE_COST, METAL_BARRICADE_COST, STONE_BARRICADE_COST);
    true
}

/// Spend wood and metal to restore beacon health, clamped at max. Works
/// from anywhere on the field. Returns true when applied.
pub fn repair_beacon(state: &mut SimState) -> bool {
    if !state.resources.covers(WOOD_REPAIR_COST, METAL_REPAIR_COST, 0) {
        return false;
    }
    state.resources.spend(WOOD_REPAIR_COST, METAL_REPAIR_COST, 0);
    state.beacon_health = (state.beacon_health + BEACON_REPAIR_AMOUNT).min(MAX_BEACON_HEALTH);
    true
}

/// Convert wood, metal, and stone into one ammunition batch, clamped at
/// the magazine ceiling. Returns true when applied.
pub fn create_ammo(state: &mut SimState) -> bool {
    if !state
        .resources
        .covers(WOOD_AMMO_COST, METAL_AMMO_COST, STONE_AMMO_COST)
    {
        return false;
    }
    state
        .resources
        .spend(WOOD_AMMO_COST, METAL_AMMO_COST, STONE_AMMO_COST);
    state.resources.ammo = (state.resources.ammo + AMMO_CREATE_AMOUNT).min(MAX_AMMO);
    true
}
