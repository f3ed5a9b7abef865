//! Round-over-round enemy difficulty scaling.
//!
//! The base stat table is shared by all enemies spawned in a round;
//! per-entity stats are copied from it at spawn time. At each round
//! clear the controller draws weighted upgrades from [`ENEMY_UPGRADE_POOL`]
//! and applies them here.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::EnemyStat;

/// Weighted upgrade pool for the round-clear draw. Draws are independent
/// and with replacement.
pub const ENEMY_UPGRADE_POOL: [(EnemyStat, u32); 4] = [
    (EnemyStat::Speed, 3),
    (EnemyStat::ShootInterval, 3),
    (EnemyStat::MaxHealth, 2),
    (EnemyStat::Damage, 2),
];

/// The scaling enemy base stat table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemyStats {
    pub speed: f64,
    pub shoot_interval_ms: f64,
    pub max_health: i32,
    pub damage: i32,
}

impl Default for EnemyStats {
    fn default() -> Self {
        Self {
            speed: ENEMY_BASE_SPEED,
            shoot_interval_ms: ENEMY_BASE_SHOOT_INTERVAL_MS,
            max_health: ENEMY_BASE_MAX_HEALTH,
            damage: ENEMY_BASE_DAMAGE,
        }
    }
}

impl EnemyStats {
    /// Apply one drawn upgrade. The shoot interval shrinks multiplicatively
    /// and is floor-clamped so it can never drop below
    /// `ENEMY_SHOOT_INTERVAL_FLOOR_MS`.
    pub fn apply_upgrade(&mut self, stat: EnemyStat) {
        match stat {
            EnemyStat::Speed => self.speed += ENEMY_SPEED_STEP,
            EnemyStat::ShootInterval => {
                self.shoot_interval_ms = (self.shoot_interval_ms * ENEMY_SHOOT_INTERVAL_FACTOR)
                    .max(ENEMY_SHOOT_INTERVAL_FLOOR_MS);
            }
            EnemyStat::MaxHealth => self.max_health += ENEMY_MAX_HEALTH_STEP,
            EnemyStat::Damage => self.damage += ENEMY_DAMAGE_STEP,
        }
    }

    /// Sum of the pool weights (denominator for the draw).
    pub fn pool_total_weight() -> u32 {
        ENEMY_UPGRADE_POOL.iter().map(|(_, w)| w).sum()
    }

    /// Map a roll in `0..pool_total_weight()` onto a pool entry.
    pub fn pool_pick(roll: u32) -> EnemyStat {
        let mut remaining = roll;
        for &(stat, weight) in ENEMY_UPGRADE_POOL.iter() {
            if remaining < weight {
                return stat;
            }
            remaining -= weight;
        }
        // Unreachable for rolls inside the weight sum; fall back to the
        // last entry rather than panic.
        ENEMY_UPGRADE_POOL[ENEMY_UPGRADE_POOL.len() - 1].0
    }
}
