//! Events emitted by the simulation for presentation-layer feedback.

use serde::{Deserialize, Serialize};

/// Notifications accumulated between snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Visible state changed; the embedder should re-render.
    Updated,
    /// A terminal condition was reached. Emitted exactly once per game.
    GameOver,
}
