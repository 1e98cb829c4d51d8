//! Game state snapshot: the complete visible state handed to the
//! presentation layer after each advance.

use serde::{Deserialize, Serialize};

use crate::components::{Barricade, Player, ResourceStock};
use crate::events::GameEvent;
use crate::geometry::FieldGeometry;
use crate::types::Position;

/// Read-only view of one instant of the simulation, plus every
/// notification accumulated since the previous snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The player unit. `None` before the first game start.
    pub player: Option<Player>,
    /// Enemy positions, in spawn order.
    pub enemies: Vec<Position>,
    /// Standing barricades, in build order.
    pub barricades: Vec<Barricade>,
    pub resources: ResourceStock,
    pub beacon_health: i32,
    pub geometry: FieldGeometry,
    pub game_over: bool,
    /// Drained notification buffer. Empty when nothing changed.
    pub events: Vec<GameEvent>,
}
