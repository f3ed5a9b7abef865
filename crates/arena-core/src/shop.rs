//! The between-rounds shop: purchasable stat upgrades with escalating
//! costs, and the round-clear money award.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::{CombatStats, Health};
use crate::constants::{
    ATTACK_CADENCE_FLOOR_MS, COST_ESCALATION, ROUND_CLEAR_BASE_REWARD, ROUND_CLEAR_HEALTH_BONUS,
};
use crate::enums::PlayerStat;

/// Why a purchase was refused. Refusal never mutates state.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ShopError {
    #[error("insufficient funds: have {money}, need {cost}")]
    InsufficientFunds { cost: u32, money: u32 },
    #[error("{} is already at its floor", stat.as_str())]
    StatAtFloor { stat: PlayerStat },
}

/// One upgrade line in the shop. `cost` escalates by x1.5 (floored)
/// after each purchase of the same stat.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UpgradeOffer {
    pub stat: PlayerStat,
    pub cost: u32,
    /// Fixed per-purchase delta. For `AttackCadence` this is a reduction.
    pub increment: i32,
}

/// Shop state for one match. Costs reset with the run, not per round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    offers: Vec<UpgradeOffer>,
}

impl Default for Shop {
    fn default() -> Self {
        Self {
            offers: vec![
                UpgradeOffer {
                    stat: PlayerStat::MaxHealth,
                    cost: 10,
                    increment: 10,
                },
                UpgradeOffer {
                    stat: PlayerStat::MoveSpeed,
                    cost: 15,
                    increment: 20,
                },
                UpgradeOffer {
                    stat: PlayerStat::AttackRange,
                    cost: 20,
                    increment: 15,
                },
                UpgradeOffer {
                    stat: PlayerStat::AttackCadence,
                    cost: 25,
                    increment: 5,
                },
                UpgradeOffer {
                    stat: PlayerStat::Damage,
                    cost: 30,
                    increment: 5,
                },
            ],
        }
    }
}

impl Shop {
    pub fn offers(&self) -> &[UpgradeOffer] {
        &self.offers
    }

    /// Current cost of one stat's next level.
    pub fn cost_of(&self, stat: PlayerStat) -> u32 {
        self.offers
            .iter()
            .find(|o| o.stat == stat)
            .map(|o| o.cost)
            .unwrap_or(0)
    }

    /// Attempt a purchase. On success the money is debited, the stat is
    /// incremented, and the offer's cost escalates; the paid cost is
    /// returned. On failure nothing changes.
    pub fn purchase(
        &mut self,
        stat: PlayerStat,
        money: &mut u32,
        stats: &mut CombatStats,
        health: &mut Health,
    ) -> Result<u32, ShopError> {
        let offer = match self.offers.iter_mut().find(|o| o.stat == stat) {
            Some(offer) => offer,
            None => return Err(ShopError::StatAtFloor { stat }),
        };

        if *money < offer.cost {
            return Err(ShopError::InsufficientFunds {
                cost: offer.cost,
                money: *money,
            });
        }

        // Apply the stat delta; the cadence reduction is floor-guarded
        // and must be checked before any money moves.
        match stat {
            PlayerStat::MaxHealth => {
                health.max += offer.increment;
            }
            PlayerStat::MoveSpeed => {
                stats.move_speed += offer.increment as f64;
            }
            PlayerStat::AttackRange => {
                stats.attack_range += offer.increment as f64;
            }
            PlayerStat::AttackCadence => {
                let next = stats.attack_cadence_ms - offer.increment as f64;
                if next < ATTACK_CADENCE_FLOOR_MS {
                    return Err(ShopError::StatAtFloor { stat });
                }
                stats.attack_cadence_ms = next;
            }
            PlayerStat::Damage => {
                stats.damage += offer.increment;
            }
        }

        let paid = offer.cost;
        *money -= paid;
        offer.cost = (offer.cost as f64 * COST_ESCALATION).floor() as u32;
        Ok(paid)
    }
}

/// Money awarded at round clear: a flat base plus a bonus scaled by the
/// player's remaining health fraction.
pub fn round_reward(health_fraction: f64) -> u32 {
    let fraction = health_fraction.clamp(0.0, 1.0);
    ROUND_CLEAR_BASE_REWARD + (fraction * ROUND_CLEAR_HEALTH_BONUS as f64).floor() as u32
}
