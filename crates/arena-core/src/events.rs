//! Events emitted by the simulation for presentation feedback —
//! explosions, spawn indicators, health bars, shop notices.

use serde::{Deserialize, Serialize};

use crate::enums::{PlayerStat, Side};
use crate::shop::ShopError;

/// Lifecycle and feedback events, drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A round intro began (announcement display).
    RoundStarted { round: u32 },
    /// A move order was accepted (move indicator placement).
    MoveOrdered { x: f64, y: f64, alt_move: bool },
    /// A spawn telegraph appeared; the enemy materializes after a delay.
    SpawnTelegraphed { x: f64, y: f64 },
    /// An enemy materialized at its telegraphed position.
    EnemySpawned { id: u32, x: f64, y: f64 },
    /// An enemy died and was removed.
    EnemyDestroyed { id: u32 },
    /// A bullet was fired.
    BulletFired { side: Side },
    /// Damage landed on a combatant.
    DamageApplied {
        target: Side,
        amount: i32,
        remaining: i32,
    },
    /// All enemies down — round cleared, money awarded.
    RoundCleared { round: u32, reward: u32 },
    ShopOpened,
    UpgradePurchased { stat: PlayerStat, cost: u32 },
    /// A purchase was refused with a user-facing notice (stat floor).
    PurchaseRejected { stat: PlayerStat, reason: ShopError },
    /// The player died; the run is over.
    PlayerDied,
}
