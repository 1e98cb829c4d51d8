//! Whole-state initialization for game start.

use beacon_core::components::{Player, ResourceStock};
use beacon_core::constants::MAX_BEACON_HEALTH;
use beacon_core::geometry::FieldGeometry;

use crate::state::SimState;

/// Rebuild `state` for a fresh game on the given viewport: derive the
/// field geometry, stand the player on the center cell, restore every
/// stock and the beacon to its initial value, and clear enemies,
/// barricades, and the game-over flag. Prior state is discarded
/// wholesale, so a restart never leaks leftovers.
pub fn initialize(state: &mut SimState, viewport_width: i32, viewport_height: i32) {
    let geometry = FieldGeometry::derive(viewport_width, viewport_height);
    *state = SimState {
        player: Some(Player::new(geometry.player_spawn())),
        enemies: Vec::new(),
        barricades: Vec::new(),
        resources: ResourceStock::initial(),
        beacon_health: MAX_BEACON_HEALTH,
        geometry,
        game_over: false,
    };
}
