//! Game state snapshot — the complete visible state produced each tick
//! for the presentation layer. Read-only numeric state plus the tick's
//! lifecycle events; widgets (health bars, shop panel) render from this.

use serde::{Deserialize, Serialize};

use crate::components::CombatStats;
use crate::enums::{GamePhase, HealthBand, PlayerStat, Side};
use crate::events::GameEvent;
use crate::scaling::EnemyStats;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state for one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub round: RoundView,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    pub telegraphs: Vec<Position>,
    pub shop: ShopView,
    pub events: Vec<GameEvent>,
}

/// Round/wave progression state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoundView {
    pub round_number: u32,
    pub enemies_per_round: u32,
    pub enemies_spawned: u32,
    pub is_spawning: bool,
    pub live_enemies: u32,
}

/// Player state for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
    pub band: HealthBand,
    pub stats: CombatStats,
    pub money: u32,
    /// Current move target, if a move order is in flight.
    pub move_target: Option<Position>,
}

impl Default for PlayerView {
    fn default() -> Self {
        Self {
            position: Position::default(),
            health: 0,
            max_health: 0,
            band: HealthBand::Critical,
            stats: CombatStats {
                move_speed: 0.0,
                attack_range: 0.0,
                attack_cadence_ms: 0.0,
                damage: 0,
            },
            money: 0,
            move_target: None,
        }
    }
}

/// One live enemy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub position: Position,
    pub health: i32,
    pub max_health: i32,
}

/// One bullet in flight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub side: Side,
    pub position: Position,
    pub velocity: Velocity,
}

/// One shop line: the offer plus the stat's current value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfferView {
    pub stat: PlayerStat,
    pub cost: u32,
    pub increment: i32,
    pub current_value: f64,
}

/// Shop panel state, including the enemy base stat readout shown
/// between rounds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopView {
    pub open: bool,
    pub offers: Vec<OfferView>,
    pub enemy_stats: Option<EnemyStats>,
}
