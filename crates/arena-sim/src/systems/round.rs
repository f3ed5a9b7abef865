//! Round progression state and spawn scheduling.
//!
//! Spawning is serialized: at most one enemy is being introduced at a
//! time. The telegraph-then-materialize sequence and the inter-spawn
//! cooldown both run through the engine's scheduler.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arena_core::components::{Enemy, Health};
use arena_core::constants::*;
use arena_core::events::GameEvent;
use arena_core::types::Position;

use crate::scheduler::{Scheduler, TaskKind};
use crate::world_setup;

/// Round/wave progression state, one per match.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub round_number: u32,
    pub enemies_per_round: u32,
    pub enemies_spawned: u32,
    /// True from the moment a spawn is telegraphed until its cooldown
    /// elapses.
    pub is_spawning: bool,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            round_number: 1,
            enemies_per_round: ENEMIES_FIRST_ROUND,
            enemies_spawned: 0,
            is_spawning: false,
        }
    }
}

impl RoundState {
    pub fn all_spawned(&self) -> bool {
        self.enemies_spawned >= self.enemies_per_round
    }

    /// Reset per-round spawn progress when a new round begins.
    pub fn reset_spawn_progress(&mut self) {
        self.enemies_spawned = 0;
        self.is_spawning = false;
    }
}

/// Telegraph the next spawn if the round still owes enemies and no spawn
/// is already in flight.
pub fn try_begin_spawn(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    scheduler: &mut Scheduler,
    round: &mut RoundState,
    events: &mut Vec<GameEvent>,
    current_tick: u64,
) {
    if round.is_spawning || round.all_spawned() {
        return;
    }

    let player_pos = super::movement::player_position(world)
        .unwrap_or_else(|| Position::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0));
    let position = pick_spawn_position(rng, &player_pos, WORLD_WIDTH, WORLD_HEIGHT);

    let telegraph = world_setup::spawn_telegraph(world, position);
    events.push(GameEvent::SpawnTelegraphed {
        x: position.x,
        y: position.y,
    });
    scheduler.schedule(
        current_tick + SPAWN_TELEGRAPH_TICKS,
        Some(telegraph),
        TaskKind::MaterializeEnemy { position },
    );
    round.is_spawning = true;
}

/// Rejection-sample a spawn position uniformly within the bounds until
/// it is at least `SAFE_SPAWN_DISTANCE` from the player. The loop is
/// bounded: past `SPAWN_ATTEMPT_LIMIT` attempts the farthest candidate
/// seen wins, so arenas tighter than the safe distance cannot hang.
pub fn pick_spawn_position(
    rng: &mut ChaCha8Rng,
    player_pos: &Position,
    width: f64,
    height: f64,
) -> Position {
    let mut best: Option<(Position, f64)> = None;

    for _ in 0..SPAWN_ATTEMPT_LIMIT {
        let candidate = Position::new(
            rng.gen_range(SPAWN_MARGIN..(width - SPAWN_MARGIN)),
            rng.gen_range(SPAWN_MARGIN..(height - SPAWN_MARGIN)),
        );
        let distance = player_pos.distance_to(&candidate);
        if distance >= SAFE_SPAWN_DISTANCE {
            return candidate;
        }
        if best.map(|(_, d)| distance > d).unwrap_or(true) {
            best = Some((candidate, distance));
        }
    }

    best.map(|(pos, _)| pos)
        .unwrap_or_else(|| Position::new(width / 2.0, height / 2.0))
}

/// Number of live enemies in the world.
pub fn live_enemy_count(world: &World) -> u32 {
    world
        .query::<(&Enemy, &Health)>()
        .iter()
        .filter(|(_, (_, health))| health.is_alive())
        .count() as u32
}

/// The round-clear condition: every enemy for the round has spawned, no
/// spawn is in flight, the shop is closed, and no enemy is left alive.
/// Pure read — evaluating it twice without an intervening tick gives the
/// same answer.
pub fn is_round_clear(world: &World, round: &RoundState, shop_open: bool) -> bool {
    round.all_spawned() && !round.is_spawning && !shop_open && live_enemy_count(world) == 0
}
