//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{HEALTH_CRITICAL_FRACTION, HEALTH_WOUNDED_FRACTION};

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    /// Round announcement; the player is healed and spawning is armed.
    RoundIntro,
    /// Combat in progress: spawning, shooting, round-clear checks.
    Active,
    /// Between rounds: the shop is open, the world is frozen.
    Shop,
    Paused,
    /// The player died. The only terminal transition.
    GameOver,
}

/// Which side a combatant or bullet belongs to. A bullet may only
/// damage the opposing side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    pub fn opposing(&self) -> Side {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Player stats purchasable in the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerStat {
    MaxHealth,
    MoveSpeed,
    AttackRange,
    /// Time between shots; the upgrade shortens it (floored).
    AttackCadence,
    Damage,
}

impl PlayerStat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MaxHealth => "max health",
            Self::MoveSpeed => "move speed",
            Self::AttackRange => "attack range",
            Self::AttackCadence => "attack cadence",
            Self::Damage => "damage",
        }
    }
}

/// Enemy base stats eligible for round scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyStat {
    Speed,
    ShootInterval,
    MaxHealth,
    Damage,
}

/// Coarse health band for presentation (health bar coloring).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthBand {
    Healthy,
    Wounded,
    Critical,
}

impl HealthBand {
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction < HEALTH_CRITICAL_FRACTION {
            Self::Critical
        } else if fraction < HEALTH_WOUNDED_FRACTION {
            Self::Wounded
        } else {
            Self::Healthy
        }
    }
}
