//! Tick-ordered task scheduler.
//!
//! All delayed work (round announcements, spawn telegraphs, spawn
//! cooldowns) goes through one time-ordered queue the engine drains each
//! tick. A task may be bound to an entity; the engine drops tasks whose
//! entity is no longer alive, and despawn paths cancel bound tasks
//! outright, so a stale timer can never act on a destroyed entity.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use hecs::Entity;

use arena_core::types::Position;

/// What a scheduled task does when it fires.
#[derive(Debug, Clone)]
pub enum TaskKind {
    /// Round announcement over: combat and spawning begin.
    BeginSpawning,
    /// A spawn telegraph matured: materialize the enemy.
    MaterializeEnemy { position: Position },
    /// Inter-spawn cooldown elapsed: the next spawn may be telegraphed.
    SpawnCooldownOver,
}

/// One scheduled task.
#[derive(Debug, Clone)]
pub struct Task {
    pub due_tick: u64,
    /// Liveness guard: when set, the task only fires while this entity
    /// is still alive.
    pub bound: Option<Entity>,
    pub kind: TaskKind,
    /// Insertion order, so ties on `due_tick` fire FIFO.
    seq: u64,
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.due_tick == other.due_tick && self.seq == other.seq
    }
}

impl Eq for Task {}

impl PartialOrd for Task {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Task {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due_tick
            .cmp(&other.due_tick)
            .then(self.seq.cmp(&other.seq))
    }
}

/// Min-heap of pending tasks keyed by due tick.
#[derive(Debug, Default)]
pub struct Scheduler {
    heap: BinaryHeap<Reverse<Task>>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due_tick: u64, bound: Option<Entity>, kind: TaskKind) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Task {
            due_tick,
            bound,
            kind,
            seq,
        }));
    }

    /// Pop every task due at or before `tick`, in firing order.
    pub fn drain_due(&mut self, tick: u64) -> Vec<Task> {
        let mut due = Vec::new();
        while self
            .heap
            .peek()
            .map(|Reverse(task)| task.due_tick <= tick)
            .unwrap_or(false)
        {
            if let Some(Reverse(task)) = self.heap.pop() {
                due.push(task);
            }
        }
        due
    }

    /// Invalidate every task bound to a destroyed entity.
    pub fn cancel_bound(&mut self, entity: Entity) {
        self.heap.retain(|Reverse(task)| task.bound != Some(entity));
    }

    pub fn clear(&mut self) {
        self.heap.clear();
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
