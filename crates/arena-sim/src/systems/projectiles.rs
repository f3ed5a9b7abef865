//! Homing: player bullets re-aim toward their target's current position
//! every tick. A bullet whose target is gone keeps its last velocity and
//! flies on until it leaves the arena. Enemy bullets never re-aim.

use std::collections::HashMap;

use hecs::World;

use arena_core::components::{Bullet, Enemy, EnemyTag, Health};
use arena_core::constants::PLAYER_BULLET_SPEED;
use arena_core::enums::Side;
use arena_core::types::{Position, Velocity};

/// Re-aim every player bullet with a live target.
pub fn home(world: &mut World) {
    let targets: HashMap<u32, Position> = world
        .query::<(&Enemy, &EnemyTag, &Position, &Health)>()
        .iter()
        .filter(|(_, (_, _, _, health))| health.is_alive())
        .map(|(_, (_, tag, pos, _))| (tag.id, *pos))
        .collect();

    for (_entity, (bullet, pos, vel)) in world.query_mut::<(&Bullet, &Position, &mut Velocity)>() {
        if bullet.side != Side::Player {
            continue;
        }
        if let Some(id) = bullet.target {
            if let Some(target_pos) = targets.get(&id) {
                *vel = Velocity::along(pos.direction_to(target_pos), PLAYER_BULLET_SPEED);
            }
        }
    }
}
