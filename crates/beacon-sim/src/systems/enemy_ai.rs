//! Enemy steering: straight-line advance on the beacon.

use glam::Vec2;

use beacon_core::constants::{BEACON_FOOTPRINT_RADIUS, CELL_SIZE, ENEMY_SIZE, ENEMY_STEP};
use beacon_core::types::Position;

use crate::state::SimState;

/// Steer every enemy one step toward the beacon center. An enemy next to
/// any barricade (strict one-cell box) holds still, as does one already
/// inside the beacon footprint radius. Steps are float-normalized, then
/// truncated toward zero and clamped into the field, so enemies leave
/// the grid as soon as they start walking.
pub fn run(state: &mut SimState) {
    let geometry = state.geometry;
    let target = geometry.beacon_center();
    let arrival_sq = i64::from(BEACON_FOOTPRINT_RADIUS) * i64::from(BEACON_FOOTPRINT_RADIUS);

    let barricades = &state.barricades;
    for enemy in &mut state.enemies {
        let blocked = barricades
            .iter()
            .any(|barricade| enemy.within_box(&barricade.position, CELL_SIZE));
        if blocked || enemy.distance_squared_to(&target) <= arrival_sq {
            continue;
        }

        let direction: Vec2 = (target.as_vec2() - enemy.as_vec2()).normalize_or_zero();
        let step = direction * ENEMY_STEP as f32;
        let x = (enemy.x + step.x as i32)
            .min(geometry.field_width - ENEMY_SIZE)
            .max(0);
        let y = (enemy.y + step.y as i32)
            .min(geometry.field_height - ENEMY_SIZE)
            .max(0);
        *enemy = Position::new(x, y);
    }
}
