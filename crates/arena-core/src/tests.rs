//! Tests for the core vocabulary: health bookkeeping, shop economy,
//! round rewards, and enemy scaling.

use crate::components::{CombatStats, Health};
use crate::constants::*;
use crate::enums::{EnemyStat, HealthBand, PlayerStat};
use crate::scaling::EnemyStats;
use crate::shop::{round_reward, Shop, ShopError};
use crate::state::GameSnapshot;
use crate::types::{Position, SimTime};

fn player_stats() -> CombatStats {
    CombatStats {
        move_speed: PLAYER_MOVE_SPEED,
        attack_range: PLAYER_ATTACK_RANGE,
        attack_cadence_ms: PLAYER_ATTACK_CADENCE_MS,
        damage: PLAYER_DAMAGE,
    }
}

// ---- Health ----

#[test]
fn test_damage_clamps_at_zero() {
    let mut health = Health::full(30);
    assert!(!health.apply_damage(12));
    assert_eq!(health.current, 18);
    // Overkill clamps rather than going negative.
    assert!(health.apply_damage(100));
    assert_eq!(health.current, 0);
}

#[test]
fn test_fatal_hit_reported_once() {
    let mut health = Health::full(10);
    assert!(health.apply_damage(10), "Crossing to zero is fatal");
    assert!(
        !health.apply_damage(10),
        "Further damage on a dead combatant is not a second death"
    );
    assert_eq!(health.current, 0);
}

#[test]
fn test_reset_to_max() {
    let mut health = Health::full(100);
    health.apply_damage(70);
    health.reset_to_max();
    assert_eq!(health.current, 100);
    assert!((health.fraction() - 1.0).abs() < 1e-12);
}

#[test]
fn test_health_bands() {
    assert_eq!(HealthBand::from_fraction(1.0), HealthBand::Healthy);
    assert_eq!(HealthBand::from_fraction(0.6), HealthBand::Healthy);
    assert_eq!(HealthBand::from_fraction(0.59), HealthBand::Wounded);
    assert_eq!(HealthBand::from_fraction(0.3), HealthBand::Wounded);
    assert_eq!(HealthBand::from_fraction(0.29), HealthBand::Critical);
}

// ---- Shop ----

#[test]
fn test_purchase_debits_and_escalates() {
    let mut shop = Shop::default();
    let mut money = 25_u32;
    let mut stats = player_stats();
    let mut health = Health::full(PLAYER_MAX_HEALTH);

    // Attack range costs 20: 25 - 20 = 5, next cost floor(20 * 1.5) = 30.
    let paid = shop
        .purchase(PlayerStat::AttackRange, &mut money, &mut stats, &mut health)
        .unwrap();
    assert_eq!(paid, 20);
    assert_eq!(money, 5);
    assert_eq!(shop.cost_of(PlayerStat::AttackRange), 30);
    assert!((stats.attack_range - (PLAYER_ATTACK_RANGE + 15.0)).abs() < 1e-9);
}

#[test]
fn test_insufficient_funds_is_a_no_op() {
    let mut shop = Shop::default();
    let mut money = 9_u32;
    let mut stats = player_stats();
    let mut health = Health::full(PLAYER_MAX_HEALTH);

    let err = shop
        .purchase(PlayerStat::MaxHealth, &mut money, &mut stats, &mut health)
        .unwrap_err();
    assert_eq!(
        err,
        ShopError::InsufficientFunds { cost: 10, money: 9 }
    );
    assert_eq!(money, 9);
    assert_eq!(health.max, PLAYER_MAX_HEALTH);
    assert_eq!(shop.cost_of(PlayerStat::MaxHealth), 10, "Cost must not escalate");
}

#[test]
fn test_max_health_purchase_raises_cap_not_current() {
    let mut shop = Shop::default();
    let mut money = 100_u32;
    let mut stats = player_stats();
    let mut health = Health::full(PLAYER_MAX_HEALTH);
    health.apply_damage(40);

    shop.purchase(PlayerStat::MaxHealth, &mut money, &mut stats, &mut health)
        .unwrap();
    assert_eq!(health.max, PLAYER_MAX_HEALTH + 10);
    assert_eq!(health.current, 60, "Healing happens at round start, not in the shop");
}

#[test]
fn test_cadence_upgrade_shortens_and_floors() {
    let mut shop = Shop::default();
    let mut money = 1_000_000_u32;
    let mut stats = player_stats();
    stats.attack_cadence_ms = ATTACK_CADENCE_FLOOR_MS + 5.0;
    let mut health = Health::full(PLAYER_MAX_HEALTH);

    shop.purchase(PlayerStat::AttackCadence, &mut money, &mut stats, &mut health)
        .unwrap();
    assert!((stats.attack_cadence_ms - ATTACK_CADENCE_FLOOR_MS).abs() < 1e-9);

    let money_before = money;
    let err = shop
        .purchase(PlayerStat::AttackCadence, &mut money, &mut stats, &mut health)
        .unwrap_err();
    assert_eq!(
        err,
        ShopError::StatAtFloor {
            stat: PlayerStat::AttackCadence
        }
    );
    assert_eq!(money, money_before, "Floor rejection must not take money");
    assert!((stats.attack_cadence_ms - ATTACK_CADENCE_FLOOR_MS).abs() < 1e-9);
}

#[test]
fn test_cost_escalation_compounds_per_stat() {
    let mut shop = Shop::default();
    let mut money = 1_000_u32;
    let mut stats = player_stats();
    let mut health = Health::full(PLAYER_MAX_HEALTH);

    // Damage: 30 -> 45 -> 67.
    shop.purchase(PlayerStat::Damage, &mut money, &mut stats, &mut health)
        .unwrap();
    assert_eq!(shop.cost_of(PlayerStat::Damage), 45);
    shop.purchase(PlayerStat::Damage, &mut money, &mut stats, &mut health)
        .unwrap();
    assert_eq!(shop.cost_of(PlayerStat::Damage), 67);
    // Other stats keep their base costs.
    assert_eq!(shop.cost_of(PlayerStat::MoveSpeed), 15);
}

// ---- Round reward ----

#[test]
fn test_round_reward_at_half_health() {
    assert_eq!(round_reward(0.5), 125);
}

#[test]
fn test_round_reward_bounds() {
    assert_eq!(round_reward(1.0), 150);
    assert_eq!(round_reward(0.0), 100);
    // Out-of-range fractions are clamped.
    assert_eq!(round_reward(2.0), 150);
    assert_eq!(round_reward(-1.0), 100);
}

// ---- Enemy scaling ----

#[test]
fn test_scaling_steps() {
    let mut stats = EnemyStats::default();
    stats.apply_upgrade(EnemyStat::Speed);
    assert!((stats.speed - (ENEMY_BASE_SPEED + ENEMY_SPEED_STEP)).abs() < 1e-9);
    stats.apply_upgrade(EnemyStat::MaxHealth);
    assert_eq!(stats.max_health, ENEMY_BASE_MAX_HEALTH + ENEMY_MAX_HEALTH_STEP);
    stats.apply_upgrade(EnemyStat::Damage);
    assert_eq!(stats.damage, ENEMY_BASE_DAMAGE + ENEMY_DAMAGE_STEP);
}

#[test]
fn test_shoot_interval_floor() {
    let mut stats = EnemyStats::default();
    for _ in 0..200 {
        stats.apply_upgrade(EnemyStat::ShootInterval);
        assert!(
            stats.shoot_interval_ms >= ENEMY_SHOOT_INTERVAL_FLOOR_MS,
            "Interval {} dropped below the floor",
            stats.shoot_interval_ms
        );
    }
    assert!((stats.shoot_interval_ms - ENEMY_SHOOT_INTERVAL_FLOOR_MS).abs() < 1e-9);
}

#[test]
fn test_pool_pick_covers_all_rolls() {
    let total = EnemyStats::pool_total_weight();
    assert_eq!(total, 10);
    // Every roll inside the weight sum maps to a pool entry; the weights
    // partition the roll space in pool order.
    assert_eq!(EnemyStats::pool_pick(0), EnemyStat::Speed);
    assert_eq!(EnemyStats::pool_pick(2), EnemyStat::Speed);
    assert_eq!(EnemyStats::pool_pick(3), EnemyStat::ShootInterval);
    assert_eq!(EnemyStats::pool_pick(5), EnemyStat::ShootInterval);
    assert_eq!(EnemyStats::pool_pick(6), EnemyStat::MaxHealth);
    assert_eq!(EnemyStats::pool_pick(7), EnemyStat::MaxHealth);
    assert_eq!(EnemyStats::pool_pick(8), EnemyStat::Damage);
    assert_eq!(EnemyStats::pool_pick(9), EnemyStat::Damage);
}

// ---- Types & snapshot ----

#[test]
fn test_direction_to_is_normalized() {
    let a = Position::new(0.0, 0.0);
    let b = Position::new(3.0, 4.0);
    let (dx, dy) = a.direction_to(&b);
    assert!((dx - 0.6).abs() < 1e-12);
    assert!((dy - 0.8).abs() < 1e-12);
    // Coincident points give a zero direction, not NaN.
    let (zx, zy) = a.direction_to(&a);
    assert_eq!((zx, zy), (0.0, 0.0));
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..TICK_RATE {
        time.advance();
    }
    assert_eq!(time.tick, TICK_RATE as u64);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
}

#[test]
fn test_snapshot_serializes() {
    let snapshot = GameSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.time.tick, 0);
    assert!(back.enemies.is_empty());
}
