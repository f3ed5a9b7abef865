//! Movement resolution and kinematic integration.
//!
//! The player follows an explicit move order; enemies pursue the
//! player's current position every tick (no pathfinding). Integration
//! applies `position += velocity * DT` to every moving entity.

use hecs::World;

use arena_core::components::*;
use arena_core::constants::DT;
use arena_core::types::{Position, Velocity};

/// Current player position, if a player entity exists.
pub fn player_position(world: &World) -> Option<Position> {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}

/// Resolve the player's move order into a velocity for this tick.
///
/// Arrival is detected when the remaining distance is below one frame of
/// travel; the order is then cleared and auto-fire re-enabled. An
/// alt-move order is additionally interrupted the moment any live enemy
/// enters attack range, regardless of remaining distance.
pub fn resolve_player(world: &mut World) {
    let enemy_positions: Vec<Position> = world
        .query::<(&Enemy, &Position, &Health)>()
        .iter()
        .filter(|(_, (_, _, health))| health.is_alive())
        .map(|(_, (_, pos, _))| *pos)
        .collect();

    let mut arrived = None;
    for (entity, (_player, pos, vel, stats, order)) in
        world.query_mut::<(&Player, &Position, &mut Velocity, &CombatStats, &MoveOrder)>()
    {
        let in_combat_range = order.alt_move
            && enemy_positions
                .iter()
                .any(|enemy| pos.distance_to(enemy) <= stats.attack_range);

        if in_combat_range || pos.distance_to(&order.target) < stats.move_speed * DT {
            *vel = Velocity::zero();
            arrived = Some(entity);
        } else {
            *vel = Velocity::along(pos.direction_to(&order.target), stats.move_speed);
        }
    }

    if let Some(entity) = arrived {
        let _ = world.remove_one::<MoveOrder>(entity);
        if let Ok(mut attack) = world.get::<&mut AttackState>(entity) {
            attack.ready = true;
        }
    }
}

/// Steer every live enemy toward the player at its own move speed.
pub fn steer_enemies(world: &mut World) {
    let player_pos = match player_position(world) {
        Some(pos) => pos,
        None => return,
    };

    for (_entity, (_enemy, pos, vel, stats, health)) in
        world.query_mut::<(&Enemy, &Position, &mut Velocity, &CombatStats, &Health)>()
    {
        if !health.is_alive() {
            continue;
        }
        *vel = Velocity::along(pos.direction_to(&player_pos), stats.move_speed);
    }
}

/// Kinematic integration for all entities with Position + Velocity.
pub fn integrate(world: &mut World) {
    for (_entity, (pos, vel)) in world.query_mut::<(&mut Position, &Velocity)>() {
        pos.x += vel.x * DT;
        pos.y += vel.y * DT;
    }
}
