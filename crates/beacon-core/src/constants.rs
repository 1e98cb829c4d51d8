//! Simulation constants and tuning parameters.
//!
//! All distances are in pixels, all durations in milliseconds, all stocks
//! in whole units.

// --- Grid geometry ---

/// Edge length of one field cell in pixels. Player moves, barricade
/// placement, and enemy spawns are all snapped to this grid.
pub const CELL_SIZE: i32 = 20;

/// Player sprite edge length in pixels.
pub const PLAYER_SIZE: i32 = 10;

/// Enemy sprite edge length in pixels.
pub const ENEMY_SIZE: i32 = 15;

/// Side of the central land square, in cells. The player dies on leaving
/// it; enemies never spawn inside it.
pub const LAND_SIZE_CELLS: i32 = 10;

/// Side of the beacon footprint, in cells.
pub const BEACON_SIZE_CELLS: i32 = 4;

/// Radius in pixels around the beacon center inside which an enemy counts
/// as having reached the beacon, for both arrival and structure damage.
pub const BEACON_FOOTPRINT_RADIUS: i32 = BEACON_SIZE_CELLS * CELL_SIZE;

// --- Tick scheduling ---

/// Interval of the fast trigger (enemy steering and collision checks).
pub const FAST_TICK_INTERVAL_MS: u64 = 150;

/// Interval of the damage trigger (beacon and barricade wear).
pub const DAMAGE_TICK_INTERVAL_MS: u64 = 5000;

/// Interval of the spawn trigger (new enemy placement).
pub const SPAWN_TICK_INTERVAL_MS: u64 = 3000;

// --- Movement and combat ---

/// Enemy advance per fast tick in pixels (a quarter cell).
pub const ENEMY_STEP: i32 = CELL_SIZE / 4;

/// Half-width per axis of the player/enemy contact box.
pub const CONTACT_RANGE: i32 = CELL_SIZE / 2 + ENEMY_SIZE / 2;

/// Maximum distance from the player head at which a shot can hit.
pub const SHOOTING_RANGE: i32 = 200;

/// Ammunition spent per successful shot.
pub const AMMO_COST: i32 = 1;

/// Damage applied per enemy hit, to the beacon and to barricades alike.
pub const ENEMY_DAMAGE: i32 = 10;

// --- Beacon ---

/// Beacon health at game start, and its repair ceiling.
pub const MAX_BEACON_HEALTH: i32 = 100;

/// Wood cost of one repair action.
pub const WOOD_REPAIR_COST: i32 = 20;

/// Metal cost of one repair action.
pub const METAL_REPAIR_COST: i32 = 10;

/// Health restored by one repair action.
pub const BEACON_REPAIR_AMOUNT: i32 = 20;

// --- Barricades ---

/// Health of a freshly placed barricade.
pub const BARRICADE_HEALTH: i32 = 10;

/// Wood cost of one barricade.
pub const WOOD_BARRICADE_COST: i32 = 10;

/// Metal cost of one barricade.
pub const METAL_BARRICADE_COST: i32 = 5;

/// Stone cost of one barricade.
pub const STONE_BARRICADE_COST: i32 = 5;

// --- Economy ---

/// Shared ceiling for the wood, metal, and stone stocks.
pub const MAX_RESOURCES: i32 = 150;

/// Ceiling for the ammunition stock.
pub const MAX_AMMO: i32 = 100;

/// Wood gained per harvest action in the wood zone.
pub const WOOD_HARVEST_AMOUNT: i32 = 10;

/// Stone gained per harvest action in the stone zone.
pub const STONE_HARVEST_AMOUNT: i32 = 7;

/// Metal gained per harvest action in the metal zone.
pub const METAL_HARVEST_AMOUNT: i32 = 5;

/// Wood cost of one ammunition batch.
pub const WOOD_AMMO_COST: i32 = 5;

/// Metal cost of one ammunition batch.
pub const METAL_AMMO_COST: i32 = 10;

/// Stone cost of one ammunition batch.
pub const STONE_AMMO_COST: i32 = 5;

/// Ammunition produced per batch.
pub const AMMO_CREATE_AMOUNT: i32 = 20;

// --- Initial stocks ---

/// Wood stock at game start.
pub const INITIAL_WOOD: i32 = 100;

/// Metal stock at game start.
pub const INITIAL_METAL: i32 = 50;

/// Stone stock at game start.
pub const INITIAL_STONE: i32 = 75;

/// Ammunition stock at game start.
pub const INITIAL_AMMO: i32 = 10;

// --- Spawning ---

/// Rejection-sampling attempts before the spawn system falls back to a
/// fixed corner cell.
pub const SPAWN_MAX_ATTEMPTS: u32 = 64;
