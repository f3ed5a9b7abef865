//! Snapshot system: queries the ECS world and builds a complete
//! GameSnapshot. Read-only — it never modifies the world.

use hecs::World;

use arena_core::components::*;
use arena_core::enums::{GamePhase, HealthBand, PlayerStat};
use arena_core::events::GameEvent;
use arena_core::scaling::EnemyStats;
use arena_core::shop::Shop;
use arena_core::state::*;
use arena_core::types::{Position, SimTime, Velocity};

use super::round::{live_enemy_count, RoundState};

/// Build a complete GameSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    round: &RoundState,
    shop: &Shop,
    enemy_stats: &EnemyStats,
    money: u32,
    events: Vec<GameEvent>,
) -> GameSnapshot {
    let player = build_player(world, money);

    GameSnapshot {
        time: *time,
        phase,
        round: RoundView {
            round_number: round.round_number,
            enemies_per_round: round.enemies_per_round,
            enemies_spawned: round.enemies_spawned,
            is_spawning: round.is_spawning,
            live_enemies: live_enemy_count(world),
        },
        shop: build_shop(phase, shop, enemy_stats, &player),
        player,
        enemies: build_enemies(world),
        bullets: build_bullets(world),
        telegraphs: build_telegraphs(world),
        events,
    }
}

fn build_player(world: &World, money: u32) -> PlayerView {
    world
        .query::<(&Player, &Position, &Health, &CombatStats, Option<&MoveOrder>)>()
        .iter()
        .next()
        .map(|(_, (_, pos, health, stats, order))| PlayerView {
            position: *pos,
            health: health.current,
            max_health: health.max,
            band: HealthBand::from_fraction(health.fraction()),
            stats: *stats,
            money,
            move_target: order.map(|o| o.target),
        })
        .unwrap_or_default()
}

/// Enemy views, sorted by id for a stable display order.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &EnemyTag, &Position, &Health)>()
        .iter()
        .map(|(_, (_, tag, pos, health))| EnemyView {
            id: tag.id,
            position: *pos,
            health: health.current,
            max_health: health.max,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_bullets(world: &World) -> Vec<BulletView> {
    world
        .query::<(&Bullet, &Position, &Velocity)>()
        .iter()
        .map(|(_, (bullet, pos, vel))| BulletView {
            side: bullet.side,
            position: *pos,
            velocity: *vel,
        })
        .collect()
}

fn build_telegraphs(world: &World) -> Vec<Position> {
    world
        .query::<(&SpawnTelegraph, &Position)>()
        .iter()
        .map(|(_, (_, pos))| *pos)
        .collect()
}

/// The shop panel: current offers with live costs and stat values, plus
/// the enemy base stat readout shown between rounds.
fn build_shop(
    phase: GamePhase,
    shop: &Shop,
    enemy_stats: &EnemyStats,
    player: &PlayerView,
) -> ShopView {
    let open = phase == GamePhase::Shop;
    let offers = shop
        .offers()
        .iter()
        .map(|offer| OfferView {
            stat: offer.stat,
            cost: offer.cost,
            increment: offer.increment,
            current_value: match offer.stat {
                PlayerStat::MaxHealth => player.max_health as f64,
                PlayerStat::MoveSpeed => player.stats.move_speed,
                PlayerStat::AttackRange => player.stats.attack_range,
                PlayerStat::AttackCadence => player.stats.attack_cadence_ms,
                PlayerStat::Damage => player.stats.damage as f64,
            },
        })
        .collect();

    ShopView {
        open,
        offers,
        enemy_stats: open.then(|| *enemy_stats),
    }
}
