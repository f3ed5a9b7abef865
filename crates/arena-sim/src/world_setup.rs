//! Entity spawn factories.
//!
//! Creates the player, enemies, spawn telegraphs, and bullets with their
//! component bundles. Entities are plain data records in the hecs arena;
//! presentation attaches to them via snapshot views and events.

use hecs::{Entity, World};

use arena_core::components::*;
use arena_core::constants::*;
use arena_core::enums::Side;
use arena_core::scaling::EnemyStats;
use arena_core::types::{Position, Velocity};

/// Spawn the player at the arena center with default stats.
pub fn spawn_player(world: &mut World) -> Entity {
    world.spawn((
        Player,
        Position::new(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0),
        Velocity::zero(),
        Health::full(PLAYER_MAX_HEALTH),
        CombatStats {
            move_speed: PLAYER_MOVE_SPEED,
            attack_range: PLAYER_ATTACK_RANGE,
            attack_cadence_ms: PLAYER_ATTACK_CADENCE_MS,
            damage: PLAYER_DAMAGE,
        },
        AttackState::default(),
    ))
}

/// Spawn one enemy, copying its stats from the scaled base table.
/// Enemies fire on a timer regardless of range, so `attack_range` stays
/// unused at zero.
pub fn spawn_enemy(world: &mut World, id: u32, position: Position, base: &EnemyStats) -> Entity {
    world.spawn((
        Enemy,
        EnemyTag { id },
        position,
        Velocity::zero(),
        Health::full(base.max_health),
        CombatStats {
            move_speed: base.speed,
            attack_range: 0.0,
            attack_cadence_ms: base.shoot_interval_ms,
            damage: base.damage,
        },
        ShootTimer::default(),
    ))
}

/// Spawn a telegraph marking where an enemy is about to materialize.
pub fn spawn_telegraph(world: &mut World, position: Position) -> Entity {
    world.spawn((SpawnTelegraph, position))
}

/// Spawn a bullet. Player bullets carry their homing target's id; enemy
/// bullets fly the fixed velocity they were created with.
pub fn spawn_bullet(
    world: &mut World,
    side: Side,
    position: Position,
    velocity: Velocity,
    damage: i32,
    target: Option<u32>,
) -> Entity {
    world.spawn((
        Bullet {
            side,
            target,
            damage,
        },
        position,
        velocity,
    ))
}
