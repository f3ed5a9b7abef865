//! Simulation engine for ARENA.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate, and
//! produces GameSnapshots for the presentation layer.

pub mod engine;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use arena_core as core;
pub use engine::SimulationEngine;
