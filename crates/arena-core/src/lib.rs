//! Core types and definitions for the ARENA simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, commands, state snapshots, events, constants, and the
//! shop/economy model. It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod scaling;
pub mod shop;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
