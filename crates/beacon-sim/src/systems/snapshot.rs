//! Snapshot construction for the presentation layer.

use beacon_core::events::GameEvent;
use beacon_core::state::GameSnapshot;

use crate::state::SimState;

/// Build the visible-state snapshot, attaching the notifications drained
/// from the engine since the previous snapshot.
pub fn build_snapshot(state: &SimState, events: Vec<GameEvent>) -> GameSnapshot {
    GameSnapshot {
        player: state.player,
        enemies: state.enemies.clone(),
        barricades: state.barricades.clone(),
        resources: state.resources,
        beacon_health: state.beacon_health,
        geometry: state.geometry,
        game_over: state.game_over,
        events,
    }
}
