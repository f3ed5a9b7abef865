//! ECS components for hecs entities.
//!
//! Components are plain data structs with no behavior beyond their own
//! bookkeeping. Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::Side;
use crate::types::Position;

/// Marks the player entity. There is exactly one per match; it persists
/// across rounds and is healed to max at each round intro.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks an enemy entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy;

/// Stable identifier assigned to each enemy at spawn, used by homing
/// bullets and presentation effects to refer to enemies across ticks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyTag {
    pub id: u32,
}

/// Marks a spawn telegraph: the transient indicator shown where an enemy
/// is about to materialize.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnTelegraph;

/// Hit points. Invariant: `0 <= current <= max`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn full(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Reduce health, clamping at 0. Returns true when this application
    /// crossed to zero (the fatal hit). Callers own the reaction to death.
    pub fn apply_damage(&mut self, amount: i32) -> bool {
        let was_alive = self.current > 0;
        self.current = (self.current - amount).max(0);
        was_alive && self.current == 0
    }

    /// Round-start healing.
    pub fn reset_to_max(&mut self) {
        self.current = self.max;
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Remaining fraction in [0, 1].
    pub fn fraction(&self) -> f64 {
        if self.max <= 0 {
            0.0
        } else {
            (self.current.max(0) as f64 / self.max as f64).min(1.0)
        }
    }
}

/// Per-combatant numeric stats. Mutable via shop upgrades (player) or
/// copied from the scaled base table at spawn (enemies).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CombatStats {
    pub move_speed: f64,
    pub attack_range: f64,
    /// Time between shots in milliseconds. For enemies this is the
    /// shoot interval.
    pub attack_cadence_ms: f64,
    pub damage: i32,
}

/// An in-flight move command. Present only while the player is moving;
/// removed on arrival or on an alt-move combat interrupt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MoveOrder {
    pub target: Position,
    /// Alt-move: stop early as soon as any live enemy enters attack range.
    pub alt_move: bool,
}

/// Player auto-fire bookkeeping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AttackState {
    /// Elapsed time since the last shot attempt (ms).
    pub elapsed_ms: f64,
    /// Auto-fire is gated off while a move order is in flight.
    pub ready: bool,
}

impl Default for AttackState {
    fn default() -> Self {
        Self {
            elapsed_ms: 0.0,
            ready: true,
        }
    }
}

/// Repeating enemy shoot timer; fires when it reaches the enemy's
/// `attack_cadence_ms`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShootTimer {
    pub elapsed_ms: f64,
}

/// A bullet in flight. Belongs to exactly one side and may only damage
/// the opposing side; destroyed on its first qualifying overlap or on
/// leaving the arena.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    pub side: Side,
    /// Homing target (player bullets only). When the target dies
    /// mid-flight the bullet keeps its last velocity.
    pub target: Option<u32>,
    /// Damage snapshot taken from the firer at creation time.
    pub damage: i32,
}
