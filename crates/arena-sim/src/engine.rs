//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems in a fixed order each tick, and produces
//! `GameSnapshot`s. Completely headless (no rendering or input
//! dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use arena_core::commands::PlayerCommand;
use arena_core::components::{AttackState, Bullet, CombatStats, Health, MoveOrder, Player};
use arena_core::constants::*;
use arena_core::enums::{GamePhase, PlayerStat, Side};
use arena_core::events::GameEvent;
use arena_core::scaling::EnemyStats;
use arena_core::shop::{round_reward, Shop, ShopError};
use arena_core::state::GameSnapshot;
use arena_core::types::{Position, SimTime};

use crate::scheduler::{Scheduler, Task, TaskKind};
use crate::systems;
use crate::systems::round::{self, RoundState};
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all match state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    scheduler: Scheduler,
    round: RoundState,
    enemy_stats: EnemyStats,
    shop: Shop,
    money: u32,
    next_enemy_id: u32,
    events: Vec<GameEvent>,
    despawn_buffer: Vec<Entity>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            scheduler: Scheduler::new(),
            round: RoundState::default(),
            enemy_stats: EnemyStats::default(),
            shop: Shop::default(),
            money: 0,
            next_enemy_id: 0,
            events: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. Time only moves during the round intro and active
    /// combat; the menu, shop, pause, and game-over screens are frozen.
    pub fn tick(&mut self) -> GameSnapshot {
        self.process_commands();

        if matches!(self.phase, GamePhase::RoundIntro | GamePhase::Active) {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            &self.round,
            &self.shop,
            &self.enemy_stats,
            self.money,
            events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the player's current money.
    pub fn money(&self) -> u32 {
        self.money
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRun => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.start_run();
                }
            }
            PlayerCommand::MoveTo { x, y } => self.issue_move_order(x, y, false),
            PlayerCommand::AttackMoveTo { x, y } => self.issue_move_order(x, y, true),
            PlayerCommand::BuyUpgrade { stat } => {
                if self.phase == GamePhase::Shop {
                    self.buy_upgrade(stat);
                }
            }
            PlayerCommand::LeaveShop => {
                if self.phase == GamePhase::Shop {
                    self.round.reset_spawn_progress();
                    self.start_round_intro();
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::ReturnToMenu => {
                if matches!(self.phase, GamePhase::GameOver | GamePhase::Paused) {
                    self.phase = GamePhase::MainMenu;
                }
            }
        }
    }

    /// Reset all match state and enter the first round intro.
    fn start_run(&mut self) {
        self.world = World::new();
        self.scheduler.clear();
        self.time = SimTime::default();
        self.round = RoundState::default();
        self.enemy_stats = EnemyStats::default();
        self.shop = Shop::default();
        self.money = 0;
        self.next_enemy_id = 0;

        world_setup::spawn_player(&mut self.world);
        info!("run started");
        self.start_round_intro();
    }

    /// Heal the player, announce the round, and arm spawning after the
    /// announcement delay.
    fn start_round_intro(&mut self) {
        for (_entity, (_player, health)) in self.world.query_mut::<(&Player, &mut Health)>() {
            health.reset_to_max();
        }
        self.phase = GamePhase::RoundIntro;
        self.events.push(GameEvent::RoundStarted {
            round: self.round.round_number,
        });
        self.scheduler.schedule(
            self.time.tick + ROUND_INTRO_TICKS,
            None,
            TaskKind::BeginSpawning,
        );
        info!(round = self.round.round_number, "round intro");
    }

    /// Put a move order on the player. Auto-fire stays gated off until
    /// the order resolves.
    fn issue_move_order(&mut self, x: f64, y: f64, alt_move: bool) {
        if !matches!(self.phase, GamePhase::RoundIntro | GamePhase::Active) {
            return;
        }
        let player = match self.player_entity() {
            Some(entity) => entity,
            None => return,
        };

        let target = Position::new(x.clamp(0.0, WORLD_WIDTH), y.clamp(0.0, WORLD_HEIGHT));
        let _ = self.world.insert_one(player, MoveOrder { target, alt_move });
        if let Ok(mut attack) = self.world.get::<&mut AttackState>(player) {
            attack.ready = false;
        }
        self.events.push(GameEvent::MoveOrdered {
            x: target.x,
            y: target.y,
            alt_move,
        });
    }

    /// Attempt a shop purchase. An at-floor refusal carries a
    /// user-facing notice; insufficient funds is silent.
    fn buy_upgrade(&mut self, stat: PlayerStat) {
        let player = match self.player_entity() {
            Some(entity) => entity,
            None => return,
        };

        let result = match (
            self.world.get::<&mut CombatStats>(player),
            self.world.get::<&mut Health>(player),
        ) {
            (Ok(mut stats), Ok(mut health)) => {
                self.shop
                    .purchase(stat, &mut self.money, &mut stats, &mut health)
            }
            _ => return,
        };

        match result {
            Ok(cost) => {
                debug!(stat = stat.as_str(), cost, money = self.money, "upgrade purchased");
                self.events.push(GameEvent::UpgradePurchased { stat, cost });
            }
            Err(reason @ ShopError::StatAtFloor { .. }) => {
                self.events.push(GameEvent::PurchaseRejected { stat, reason });
            }
            Err(ShopError::InsufficientFunds { cost, money }) => {
                debug!(stat = stat.as_str(), cost, money, "purchase refused");
            }
        }
    }

    fn player_entity(&self) -> Option<Entity> {
        self.world
            .query::<&Player>()
            .iter()
            .next()
            .map(|(entity, _)| entity)
    }

    /// Run all systems in order. Movement resolves before spawn and
    /// round-transition checks.
    fn run_systems(&mut self) {
        // 1. Scheduled tasks (round announcement, spawn telegraph, cooldown)
        for task in self.scheduler.drain_due(self.time.tick) {
            self.run_task(task);
        }
        // 2. Player move-order resolution
        systems::movement::resolve_player(&mut self.world);
        // 3. Enemy pursuit
        systems::movement::steer_enemies(&mut self.world);
        // 4. Homing re-aim
        systems::projectiles::home(&mut self.world);
        // 5. Kinematic integration
        systems::movement::integrate(&mut self.world);
        // 6. Firing
        systems::combat::player_fire(&mut self.world, &mut self.events);
        systems::combat::enemy_fire(&mut self.world, &mut self.events);
        // 7. Collision resolution
        systems::collision::resolve(&mut self.world, &mut self.events, &mut self.despawn_buffer);
        // 8. Cleanup (OOB bullets, dead enemies)
        systems::cleanup::run(
            &mut self.world,
            &mut self.scheduler,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 9. Round controller (death, spawn scheduling, round clear)
        if self.phase == GamePhase::Active {
            self.run_round_controller();
        }
    }

    /// Execute one matured task, honoring its liveness guard.
    fn run_task(&mut self, task: Task) {
        if let Some(entity) = task.bound {
            if !self.world.contains(entity) {
                // Stale timer for a destroyed entity is a no-op, but a
                // lost materialization must release the spawn slot.
                if matches!(task.kind, TaskKind::MaterializeEnemy { .. }) {
                    self.round.is_spawning = false;
                }
                return;
            }
        }

        match task.kind {
            TaskKind::BeginSpawning => {
                if self.phase == GamePhase::RoundIntro {
                    self.phase = GamePhase::Active;
                }
            }
            TaskKind::MaterializeEnemy { position } => {
                if let Some(telegraph) = task.bound {
                    let _ = self.world.despawn(telegraph);
                }
                let id = self.next_enemy_id;
                self.next_enemy_id += 1;
                world_setup::spawn_enemy(&mut self.world, id, position, &self.enemy_stats);
                self.round.enemies_spawned += 1;
                self.events.push(GameEvent::EnemySpawned {
                    id,
                    x: position.x,
                    y: position.y,
                });
                self.scheduler.schedule(
                    self.time.tick + SPAWN_COOLDOWN_TICKS,
                    None,
                    TaskKind::SpawnCooldownOver,
                );
            }
            TaskKind::SpawnCooldownOver => {
                self.round.is_spawning = false;
            }
        }
    }

    /// Death check, spawn scheduling, and the round-clear transition.
    fn run_round_controller(&mut self) {
        let player_alive = self
            .world
            .query::<(&Player, &Health)>()
            .iter()
            .next()
            .map(|(_, (_, health))| health.is_alive())
            .unwrap_or(false);
        if !player_alive {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::PlayerDied);
            info!(round = self.round.round_number, "run over");
            return;
        }

        round::try_begin_spawn(
            &mut self.world,
            &mut self.rng,
            &mut self.scheduler,
            &mut self.round,
            &mut self.events,
            self.time.tick,
        );

        if round::is_round_clear(&self.world, &self.round, self.phase == GamePhase::Shop) {
            self.finish_round();
        }
    }

    /// Round clear: scrub enemy bullets, bump the difficulty, award
    /// money, scale the enemy base stats, and open the shop.
    fn finish_round(&mut self) {
        self.despawn_buffer.clear();
        for (entity, bullet) in self.world.query_mut::<&Bullet>() {
            if bullet.side == Side::Enemy {
                self.despawn_buffer.push(entity);
            }
        }
        for entity in self.despawn_buffer.drain(..) {
            let _ = self.world.despawn(entity);
        }

        let cleared = self.round.round_number;
        self.round.round_number += 1;
        self.round.enemies_per_round += 1;

        let fraction = self
            .world
            .query::<(&Player, &Health)>()
            .iter()
            .next()
            .map(|(_, (_, health))| health.fraction())
            .unwrap_or(0.0);
        let reward = round_reward(fraction);
        self.money += reward;
        self.events.push(GameEvent::RoundCleared {
            round: cleared,
            reward,
        });

        // One weighted draw per upcoming round number, independent and
        // with replacement.
        let total_weight = EnemyStats::pool_total_weight();
        for _ in 0..self.round.round_number {
            let roll = self.rng.gen_range(0..total_weight);
            self.enemy_stats.apply_upgrade(EnemyStats::pool_pick(roll));
        }

        self.phase = GamePhase::Shop;
        self.events.push(GameEvent::ShopOpened);
        info!(round = cleared, reward, money = self.money, "round cleared");
    }
}

#[cfg(test)]
impl SimulationEngine {
    /// Mutable world access for test setup.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn an enemy directly, bypassing the telegraph sequence.
    /// Does not touch the round's spawn accounting.
    pub fn spawn_test_enemy(&mut self, x: f64, y: f64) -> u32 {
        let id = self.next_enemy_id;
        self.next_enemy_id += 1;
        let stats = self.enemy_stats;
        world_setup::spawn_enemy(&mut self.world, id, Position::new(x, y), &stats);
        id
    }

    pub fn set_money(&mut self, amount: u32) {
        self.money = amount;
    }

    pub fn round_state(&self) -> &RoundState {
        &self.round
    }

    pub fn enemy_stats(&self) -> &EnemyStats {
        &self.enemy_stats
    }

    /// Drive the round-clear transition directly.
    pub fn force_finish_round(&mut self) {
        self.finish_round();
    }
}
