//! Player commands sent from the presentation layer to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Input
//! devices are external: by the time a command arrives here it is an
//! already-resolved move target or attack intent.

use serde::{Deserialize, Serialize};

use crate::enums::PlayerStat;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Movement ---
    /// Plain move order toward a point.
    MoveTo { x: f64, y: f64 },
    /// Alt-move: move toward a point but stop as soon as any live enemy
    /// enters attack range.
    AttackMoveTo { x: f64, y: f64 },

    // --- Shop ---
    /// Buy one level of a stat upgrade (shop phase only).
    BuyUpgrade { stat: PlayerStat },
    /// Close the shop and start the next round.
    LeaveShop,

    // --- Run control ---
    /// Start a new run from the menu (or after a game over).
    StartRun,
    /// Return to the main menu after a game over.
    ReturnToMenu,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
}
