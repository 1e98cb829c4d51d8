//! Simulation engine for the beacon defense game.
//!
//! Owns the mutable game state, runs the multi-rate tick scheduler
//! against an embedder-driven clock, and produces GameSnapshots for
//! the presentation layer.

pub mod engine;
pub mod invariants;
pub mod scheduler;
pub mod state;
pub mod systems;
pub mod world_setup;

pub use beacon_core as core;
pub use engine::{SimConfig, SimulationEngine};
