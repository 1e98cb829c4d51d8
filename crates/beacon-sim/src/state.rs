//! The mutable simulation state, the single source of truth one game
//! runs on.

use beacon_core::components::{Barricade, Player, ResourceStock};
use beacon_core::geometry::FieldGeometry;
use beacon_core::types::Position;

/// Everything a game mutates. Plain data; the systems hold the behavior
/// and the engine fixes their ordering.
///
/// Enemies and barricades keep insertion order: first-match scans in the
/// damage and combat systems resolve ties by it.
#[derive(Debug, Clone, Default)]
pub struct SimState {
    /// The player unit. `None` only before the first game start.
    pub player: Option<Player>,
    /// Enemy positions in spawn order. Duplicates are legal.
    pub enemies: Vec<Position>,
    /// Standing barricades in build order.
    pub barricades: Vec<Barricade>,
    pub resources: ResourceStock,
    pub beacon_health: i32,
    pub geometry: FieldGeometry,
    /// Set once per game by the terminal transition; freezes every
    /// mutation path until the next start.
    pub game_over: bool,
}
