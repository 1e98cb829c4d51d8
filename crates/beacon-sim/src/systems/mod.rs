//! Systems that operate on the simulation state.
//!
//! Systems are free functions over `&mut SimState` (or `&SimState` for
//! read-only checks). They do not own state and do not emit events;
//! the engine sequences them and owns the notifications.

pub mod combat;
pub mod damage;
pub mod economy;
pub mod enemy_ai;
pub mod movement;
pub mod snapshot;
pub mod spawning;
