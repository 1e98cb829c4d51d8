//! Simulation engine, the core of the game.
//!
//! `SimulationEngine` owns the simulation state, applies player actions,
//! drains the multi-rate scheduler, and produces `GameSnapshot`s.
//! Completely headless (no UI dependency), enabling deterministic
//! testing: the embedder advances the clock, the engine does the rest.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use beacon_core::commands::PlayerCommand;
use beacon_core::constants::{
    DAMAGE_TICK_INTERVAL_MS, FAST_TICK_INTERVAL_MS, SPAWN_TICK_INTERVAL_MS,
};
use beacon_core::enums::Direction;
use beacon_core::events::GameEvent;
use beacon_core::state::GameSnapshot;

use crate::scheduler::{Scheduler, TickKind};
use crate::state::SimState;
use crate::systems;
use crate::world_setup;

/// Configuration for a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same game.
    pub seed: u64,
    /// Fast trigger interval (steering and collision checks), ms.
    pub fast_interval_ms: u64,
    /// Damage trigger interval, ms.
    pub damage_interval_ms: u64,
    /// Spawn trigger interval, ms.
    pub spawn_interval_ms: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            fast_interval_ms: FAST_TICK_INTERVAL_MS,
            damage_interval_ms: DAMAGE_TICK_INTERVAL_MS,
            spawn_interval_ms: SPAWN_TICK_INTERVAL_MS,
        }
    }
}

/// The simulation engine. Owns all game state.
pub struct SimulationEngine {
    state: SimState,
    scheduler: Scheduler,
    rng: ChaCha8Rng,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config. No game is
    /// running until [`Self::start`].
    pub fn new(config: SimConfig) -> Self {
        Self {
            state: SimState::default(),
            scheduler: Scheduler::new(
                config.fast_interval_ms,
                config.damage_interval_ms,
                config.spawn_interval_ms,
            ),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            events: Vec::new(),
        }
    }

    // --- Lifecycle ---

    /// Start (or restart) a game: rebuild the whole state for the given
    /// viewport and arm every trigger. Any previous game, finished or
    /// not, is discarded along with its undelivered notifications.
    pub fn start(&mut self, viewport_width: i32, viewport_height: i32) {
        world_setup::initialize(&mut self.state, viewport_width, viewport_height);
        self.scheduler.start();
        self.events.clear();
        self.events.push(GameEvent::Updated);
        log::info!(
            "game started, field {}x{} px",
            self.state.geometry.field_width,
            self.state.geometry.field_height
        );
    }

    /// Terminal transition. Idempotent, and safe to call from inside a
    /// tick handler: the scheduler disarms at once, so no further
    /// trigger fires until the next start.
    pub fn end(&mut self) {
        if self.state.game_over {
            return;
        }
        self.state.game_over = true;
        self.scheduler.stop();
        self.events.push(GameEvent::GameOver);
        log::info!("game over at {} ms", self.scheduler.now_ms());
    }

    /// Advance the simulation clock by `elapsed_ms`, fire every trigger
    /// that came due in deadline order, and return a snapshot carrying
    /// all notifications since the previous one.
    pub fn advance(&mut self, elapsed_ms: u64) -> GameSnapshot {
        self.scheduler.advance(elapsed_ms);
        while let Some(kind) = self.scheduler.pop_due() {
            self.run_tick(kind);
        }

        #[cfg(debug_assertions)]
        {
            let violations = crate::invariants::check_invariants(&self.state);
            assert!(violations.is_empty(), "state invariants violated: {violations:?}");
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.state, events)
    }

    // --- Player actions ---

    /// Dispatch a replayable command to the matching action.
    pub fn apply(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Move { direction } => self.move_player(direction),
            PlayerCommand::Shoot => self.shoot(),
            PlayerCommand::BuildBarricade => self.build_barricade(),
            PlayerCommand::Harvest => self.harvest(),
            PlayerCommand::RepairBeacon => self.repair_beacon(),
            PlayerCommand::CreateAmmo => self.create_ammo(),
        }
    }

    /// Step the player one cell and turn its facing; the facing commits
    /// even when the field clamp holds the position. Stepping off the
    /// land square ends the game.
    pub fn move_player(&mut self, direction: Direction) {
        if self.state.game_over {
            return;
        }
        if !systems::movement::apply_move(&mut self.state, direction) {
            return;
        }
        self.events.push(GameEvent::Updated);
        if systems::movement::outside_land(&self.state) {
            self.end();
        }
    }

    /// Fire at the nearest enemy in range. Ammunition is spent only on a
    /// hit.
    pub fn shoot(&mut self) {
        if self.state.game_over {
            return;
        }
        if systems::combat::shoot(&mut self.state) {
            self.events.push(GameEvent::Updated);
        }
    }

    /// Place a barricade on the player's cell, if affordable and free.
    pub fn build_barricade(&mut self) {
        if self.state.game_over {
            return;
        }
        if systems::economy::build_barricade(&mut self.state) {
            self.events.push(GameEvent::Updated);
        }
    }

    /// Collect from the harvest zones under the player head.
    pub fn harvest(&mut self) {
        if self.state.game_over {
            return;
        }
        if systems::economy::harvest(&mut self.state) {
            self.events.push(GameEvent::Updated);
        }
    }

    /// Spend wood and metal to restore beacon health.
    pub fn repair_beacon(&mut self) {
        if self.state.game_over {
            return;
        }
        if systems::economy::repair_beacon(&mut self.state) {
            self.events.push(GameEvent::Updated);
        }
    }

    /// Convert wood, metal, and stone into ammunition.
    pub fn create_ammo(&mut self) {
        if self.state.game_over {
            return;
        }
        if systems::economy::create_ammo(&mut self.state) {
            self.events.push(GameEvent::Updated);
        }
    }

    // --- Read-only surface ---

    /// Get a read-only reference to the simulation state.
    pub fn state(&self) -> &SimState {
        &self.state
    }

    /// Whether the current game has reached its terminal state.
    pub fn game_over(&self) -> bool {
        self.state.game_over
    }

    /// Whether triggers are armed (a game is running).
    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Simulation clock in milliseconds since the last start.
    pub fn elapsed_ms(&self) -> u64 {
        self.scheduler.now_ms()
    }

    /// Place an enemy directly (for testing).
    #[cfg(test)]
    pub fn place_enemy(&mut self, position: beacon_core::types::Position) {
        self.state.enemies.push(position);
    }

    /// Place a barricade directly, bypassing cost checks (for testing).
    #[cfg(test)]
    pub fn place_barricade(&mut self, position: beacon_core::types::Position) {
        self.state
            .barricades
            .push(beacon_core::components::Barricade::new(position));
    }

    /// Get a mutable reference to the state (for test scenario setup).
    #[cfg(test)]
    pub fn state_mut(&mut self) -> &mut SimState {
        &mut self.state
    }

    // --- Tick handlers ---

    /// Run one due trigger. A finished game ignores every trigger still
    /// queued behind the one that ended it.
    fn run_tick(&mut self, kind: TickKind) {
        if self.state.game_over {
            return;
        }
        match kind {
            TickKind::Fast => self.run_fast_tick(),
            TickKind::Damage => self.run_damage_tick(),
            TickKind::Spawn => self.run_spawn_tick(),
        }
    }

    fn run_fast_tick(&mut self) {
        // 1. Player boundary check
        if systems::movement::outside_land(&self.state) {
            self.end();
            return;
        }
        // 2. Enemy steering
        systems::enemy_ai::run(&mut self.state);
        // 3. Player/enemy contact check
        if systems::movement::enemy_contact(&self.state) {
            self.end();
            return;
        }
        self.events.push(GameEvent::Updated);
    }

    fn run_damage_tick(&mut self) {
        // 1. Structure damage; a destroyed beacon ends the tick before
        //    the barricade step, so nothing mutates past the transition
        if systems::damage::apply_beacon_damage(&mut self.state) {
            self.end();
            return;
        }
        // 2. Barricade damage
        systems::damage::apply_barricade_damage(&mut self.state);
        self.events.push(GameEvent::Updated);
    }

    fn run_spawn_tick(&mut self) {
        systems::spawning::spawn_enemy(&mut self.state, &mut self.rng);
        self.events.push(GameEvent::Updated);
    }
}
