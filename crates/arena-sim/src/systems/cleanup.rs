//! Cleanup system: retires out-of-bounds bullets and removes dead
//! enemies. Uses a pre-allocated buffer to avoid per-tick allocation,
//! and cancels any scheduled task bound to a despawned entity.

use hecs::{Entity, World};

use arena_core::components::{Bullet, Enemy, EnemyTag, Health};
use arena_core::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use arena_core::events::GameEvent;
use arena_core::types::Position;

use crate::scheduler::Scheduler;

/// Remove bullets that reached the arena boundary (unconditionally,
/// regardless of target state) and enemies whose health hit zero.
pub fn run(
    world: &mut World,
    scheduler: &mut Scheduler,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    for (entity, (_bullet, pos)) in world.query_mut::<(&Bullet, &Position)>() {
        if pos.x < 0.0 || pos.x > WORLD_WIDTH || pos.y < 0.0 || pos.y > WORLD_HEIGHT {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (_enemy, tag, health)) in world.query_mut::<(&Enemy, &EnemyTag, &Health)>() {
        if !health.is_alive() {
            despawn_buffer.push(entity);
            events.push(GameEvent::EnemyDestroyed { id: tag.id });
        }
    }

    for entity in despawn_buffer.drain(..) {
        scheduler.cancel_bound(entity);
        let _ = world.despawn(entity);
    }
}
