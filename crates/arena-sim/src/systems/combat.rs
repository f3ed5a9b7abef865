//! Firing systems: player auto-fire with nearest-in-range targeting,
//! and enemy shoot timers.

use hecs::World;

use arena_core::components::*;
use arena_core::constants::{DT_MS, ENEMY_BULLET_SPEED, PLAYER_BULLET_SPEED};
use arena_core::enums::Side;
use arena_core::events::GameEvent;
use arena_core::types::{Position, Velocity};

use crate::world_setup;

/// Advance the player's attack timer and fire when ready.
///
/// Auto-fire is gated off while a move order is in flight. The timer
/// resets on the attempt even when no enemy is in range — it tracks
/// fire cadence, not hits.
pub fn player_fire(world: &mut World, events: &mut Vec<GameEvent>) {
    let mut attempt = None;
    for (_entity, (_player, pos, stats, attack, health)) in
        world.query_mut::<(&Player, &Position, &CombatStats, &mut AttackState, &Health)>()
    {
        if !health.is_alive() {
            continue;
        }
        attack.elapsed_ms += DT_MS;
        if attack.ready && attack.elapsed_ms >= stats.attack_cadence_ms {
            attack.elapsed_ms = 0.0;
            attempt = Some((*pos, stats.attack_range, stats.damage));
        }
    }

    if let Some((origin, range, damage)) = attempt {
        if let Some((target_id, target_pos)) = select_target(world, &origin, range) {
            let velocity = Velocity::along(origin.direction_to(&target_pos), PLAYER_BULLET_SPEED);
            world_setup::spawn_bullet(world, Side::Player, origin, velocity, damage, Some(target_id));
            events.push(GameEvent::BulletFired { side: Side::Player });
        }
    }
}

/// Pick the closest live enemy within `range` of `origin`. Distance ties
/// break by scan order: the first minimal candidate found wins.
pub fn select_target(world: &World, origin: &Position, range: f64) -> Option<(u32, Position)> {
    let mut closest: Option<(u32, Position)> = None;
    let mut closest_distance = f64::INFINITY;

    for (_entity, (_enemy, tag, pos, health)) in
        world.query::<(&Enemy, &EnemyTag, &Position, &Health)>().iter()
    {
        if !health.is_alive() {
            continue;
        }
        let distance = origin.distance_to(pos);
        if distance <= range && distance < closest_distance {
            closest_distance = distance;
            closest = Some((tag.id, *pos));
        }
    }

    closest
}

/// Advance every enemy's shoot timer; on expiry fire a straight-line
/// bullet aimed at the player's position at fire time (no re-aim).
pub fn enemy_fire(world: &mut World, events: &mut Vec<GameEvent>) {
    let player_pos = match super::movement::player_position(world) {
        Some(pos) => pos,
        None => return,
    };

    let mut volleys = Vec::new();
    for (_entity, (_enemy, pos, stats, timer, health)) in
        world.query_mut::<(&Enemy, &Position, &CombatStats, &mut ShootTimer, &Health)>()
    {
        if !health.is_alive() {
            continue;
        }
        timer.elapsed_ms += DT_MS;
        if timer.elapsed_ms >= stats.attack_cadence_ms {
            timer.elapsed_ms = 0.0;
            volleys.push((*pos, stats.damage));
        }
    }

    for (origin, damage) in volleys {
        let velocity = Velocity::along(origin.direction_to(&player_pos), ENEMY_BULLET_SPEED);
        world_setup::spawn_bullet(world, Side::Enemy, origin, velocity, damage, None);
        events.push(GameEvent::BulletFired { side: Side::Enemy });
    }
}
