//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

/// Milliseconds per tick. Attack cadences and shoot intervals are kept
/// in milliseconds to match the shop's cost/increment table.
pub const DT_MS: f64 = 1000.0 / TICK_RATE as f64;

// --- World bounds ---

/// Arena width in world units.
pub const WORLD_WIDTH: f64 = 1920.0;

/// Arena height in world units.
pub const WORLD_HEIGHT: f64 = 1080.0;

// --- Collision ---

/// Collision radius for player and enemies.
pub const COMBATANT_RADIUS: f64 = 20.0;

/// Collision radius for bullets.
pub const BULLET_RADIUS: f64 = 5.0;

// --- Player defaults ---

pub const PLAYER_MAX_HEALTH: i32 = 100;
pub const PLAYER_MOVE_SPEED: f64 = 300.0;
pub const PLAYER_ATTACK_RANGE: f64 = 180.0;
pub const PLAYER_ATTACK_CADENCE_MS: f64 = 300.0;
pub const PLAYER_DAMAGE: i32 = 12;

/// Hard floor for attack cadence; upgrades cannot push it lower.
pub const ATTACK_CADENCE_FLOOR_MS: f64 = 50.0;

// --- Enemy base stats (round 1, before scaling) ---

pub const ENEMY_BASE_SPEED: f64 = 10.0;
pub const ENEMY_BASE_SHOOT_INTERVAL_MS: f64 = 5000.0;
pub const ENEMY_BASE_MAX_HEALTH: i32 = 30;
pub const ENEMY_BASE_DAMAGE: i32 = 10;

/// Hard floor for the enemy shoot interval under round scaling.
pub const ENEMY_SHOOT_INTERVAL_FLOOR_MS: f64 = 20.0;

// --- Bullets ---

pub const PLAYER_BULLET_SPEED: f64 = 500.0;
pub const ENEMY_BULLET_SPEED: f64 = 300.0;

// --- Spawning ---

/// Minimum distance between a spawn point and the player.
pub const SAFE_SPAWN_DISTANCE: f64 = 150.0;

/// Rejection-sampling attempt bound; past it the farthest candidate wins.
pub const SPAWN_ATTEMPT_LIMIT: u32 = 32;

/// Spawn points keep this margin from the arena edges.
pub const SPAWN_MARGIN: f64 = COMBATANT_RADIUS;

/// Round announcement delay before spawning begins (1.5 s).
pub const ROUND_INTRO_TICKS: u64 = 90;

/// Delay between the spawn telegraph and the enemy materializing (1 s).
pub const SPAWN_TELEGRAPH_TICKS: u64 = 60;

/// Cooldown after an enemy materializes before the next spawn (0.5 s).
pub const SPAWN_COOLDOWN_TICKS: u64 = 30;

/// Enemies in round 1; each round clear adds one more.
pub const ENEMIES_FIRST_ROUND: u32 = 3;

// --- Economy ---

/// Flat money award on round clear.
pub const ROUND_CLEAR_BASE_REWARD: u32 = 100;

/// Maximum health-fraction bonus on round clear.
pub const ROUND_CLEAR_HEALTH_BONUS: u32 = 50;

/// Upgrade cost multiplier per purchase (floored).
pub const COST_ESCALATION: f64 = 1.5;

// --- Enemy round scaling steps ---

pub const ENEMY_SPEED_STEP: f64 = 3.0;
pub const ENEMY_SHOOT_INTERVAL_FACTOR: f64 = 0.85;
pub const ENEMY_MAX_HEALTH_STEP: i32 = 10;
pub const ENEMY_DAMAGE_STEP: i32 = 2;

// --- Display ---

/// Health fraction below which the player reads as wounded.
pub const HEALTH_WOUNDED_FRACTION: f64 = 0.6;

/// Health fraction below which the player reads as critical.
pub const HEALTH_CRITICAL_FRACTION: f64 = 0.3;
