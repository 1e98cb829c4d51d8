//! Player movement and the player-centric collision checks.

use beacon_core::constants::{CELL_SIZE, CONTACT_RANGE, PLAYER_SIZE};
use beacon_core::enums::Direction;
use beacon_core::types::Position;

use crate::state::SimState;

/// Shift the player one cell along `direction`, clamp it into the field,
/// and commit the new facing. The facing turns even when the clamp holds
/// the position in place. Returns false when no player exists.
pub fn apply_move(state: &mut SimState, direction: Direction) -> bool {
    let geometry = state.geometry;
    let player = match state.player.as_mut() {
        Some(player) => player,
        None => return false,
    };
    let candidate = player.position.stepped(direction, CELL_SIZE);
    // min before max: a degenerate field collapses to 0 instead of
    // panicking on an inverted clamp range.
    let x = candidate.x.min(geometry.field_width - PLAYER_SIZE).max(0);
    let y = candidate.y.min(geometry.field_height - PLAYER_SIZE).max(0);
    player.position = Position::new(x, y);
    player.facing = direction;
    true
}

/// True when the player head has left the central land square.
pub fn outside_land(state: &SimState) -> bool {
    match &state.player {
        Some(player) => !state.geometry.land.contains(&player.position),
        None => false,
    }
}

/// True when any enemy overlaps the player head's contact box.
pub fn enemy_contact(state: &SimState) -> bool {
    match &state.player {
        Some(player) => state
            .enemies
            .iter()
            .any(|enemy| player.position.within_box(enemy, CONTACT_RANGE)),
        None => false,
    }
}
