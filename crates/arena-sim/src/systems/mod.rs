//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions taking `&mut World` (or `&World` for
//! read-only) plus the state they need. They do not own state — all
//! state lives in components or on the engine.

pub mod cleanup;
pub mod collision;
pub mod combat;
pub mod movement;
pub mod projectiles;
pub mod round;
pub mod snapshot;
