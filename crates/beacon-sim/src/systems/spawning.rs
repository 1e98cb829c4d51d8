//! Enemy placement by rejection sampling.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use beacon_core::constants::{CELL_SIZE, SPAWN_MAX_ATTEMPTS};
use beacon_core::types::Position;

use crate::state::SimState;

/// Cell used when sampling cannot find a legal spot (a land square
/// covering the whole field, or a field without one whole cell).
const FALLBACK_SPAWN: Position = Position { x: 0, y: 0 };

/// Sample grid-aligned cells until one falls outside the land square,
/// then append an enemy there. Attempts are bounded; on exhaustion the
/// fixed fallback corner is used so the tick always terminates.
pub fn spawn_enemy(state: &mut SimState, rng: &mut ChaCha8Rng) {
    let geometry = state.geometry;
    let cells_x = geometry.field_width / CELL_SIZE;
    let cells_y = geometry.field_height / CELL_SIZE;

    if cells_x > 0 && cells_y > 0 {
        for _ in 0..SPAWN_MAX_ATTEMPTS {
            let candidate = Position::new(
                rng.gen_range(0..cells_x) * CELL_SIZE,
                rng.gen_range(0..cells_y) * CELL_SIZE,
            );
            if !geometry.land.contains(&candidate) {
                state.enemies.push(candidate);
                return;
            }
        }
    }

    log::warn!("no legal spawn cell after {SPAWN_MAX_ATTEMPTS} samples, using field corner");
    state.enemies.push(FALLBACK_SPAWN);
}
