//! Collision resolution.
//!
//! An overlap between a bullet and an opposing-side combatant applies
//! exactly one damage event and destroys the bullet synchronously, so a
//! bullet can never deal damage twice.

use hecs::{Entity, World};

use arena_core::components::{Bullet, Enemy, Health, Player};
use arena_core::constants::{BULLET_RADIUS, COMBATANT_RADIUS};
use arena_core::enums::Side;
use arena_core::events::GameEvent;
use arena_core::types::Position;

/// Center distance at or below which a bullet overlaps a combatant.
const HIT_DISTANCE: f64 = BULLET_RADIUS + COMBATANT_RADIUS;

/// Resolve all bullet/combatant overlaps for this tick.
pub fn resolve(world: &mut World, events: &mut Vec<GameEvent>, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    // Player bullets against enemies. Each bullet damages at most one
    // enemy: the first live one it overlaps.
    let mut hits: Vec<(Entity, Entity, i32)> = Vec::new();
    {
        let enemies: Vec<(Entity, Position)> = world
            .query::<(&Enemy, &Position, &Health)>()
            .iter()
            .filter(|(_, (_, _, health))| health.is_alive())
            .map(|(entity, (_, pos, _))| (entity, *pos))
            .collect();

        for (bullet_entity, (bullet, pos)) in world.query::<(&Bullet, &Position)>().iter() {
            if bullet.side != Side::Player {
                continue;
            }
            for &(enemy_entity, enemy_pos) in &enemies {
                if pos.distance_to(&enemy_pos) <= HIT_DISTANCE {
                    hits.push((bullet_entity, enemy_entity, bullet.damage));
                    break;
                }
            }
        }
    }
    for (bullet_entity, enemy_entity, damage) in hits {
        if let Ok(mut health) = world.get::<&mut Health>(enemy_entity) {
            health.apply_damage(damage);
            events.push(GameEvent::DamageApplied {
                target: Side::Enemy,
                amount: damage,
                remaining: health.current,
            });
        }
        despawn_buffer.push(bullet_entity);
    }

    // Enemy bullets against the player.
    let mut player_hits: Vec<(Entity, i32)> = Vec::new();
    let player = {
        let mut query = world.query::<(&Player, &Position, &Health)>();
        query
            .iter()
            .next()
            .filter(|(_, (_, _, health))| health.is_alive())
            .map(|(entity, (_, pos, _))| (entity, *pos))
    };
    if let Some((player_entity, player_pos)) = player {
        for (bullet_entity, (bullet, pos)) in world.query::<(&Bullet, &Position)>().iter() {
            if bullet.side != Side::Enemy {
                continue;
            }
            if pos.distance_to(&player_pos) <= HIT_DISTANCE {
                player_hits.push((bullet_entity, bullet.damage));
            }
        }
        for (bullet_entity, damage) in player_hits {
            if let Ok(mut health) = world.get::<&mut Health>(player_entity) {
                health.apply_damage(damage);
                events.push(GameEvent::DamageApplied {
                    target: Side::Player,
                    amount: damage,
                    remaining: health.current,
                });
            }
            despawn_buffer.push(bullet_entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
