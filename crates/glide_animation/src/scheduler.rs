//! Time sources and delayed tasks
//!
//! The controllers never run timers themselves. They ask the frame driver to
//! call back after a delay by handing out a [`DelayedTask`], and the driver
//! later passes the task's [`TaskId`] back to the controller.
//!
//! A controller keeps at most one task alive in a [`DelayedTaskSlot`]. Posting
//! again invalidates the previous id, and since ids are generational slotmap
//! keys a stale id can never match a newer task. Firing a stale id is
//! therefore always a no-op.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::time::{Duration, Instant};

new_key_type! {
    /// Identifier of a posted delayed task
    pub struct TaskId;
    struct ScheduledKey;
}

/// Source of the current time
pub trait TimeSource {
    fn now(&self) -> Instant;
}

/// Wall clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Deterministic clock for tests and simulations
#[derive(Clone, Copy, Debug)]
pub struct ManualClock {
    base: Instant,
    elapsed: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(base: Instant) -> Self {
        Self {
            base,
            elapsed: Duration::ZERO,
        }
    }

    /// Move time forward by `delta`
    pub fn advance(&mut self, delta: Duration) {
        self.elapsed += delta;
    }

    /// Jump to `elapsed` after the base instant. Time never moves backwards.
    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = self.elapsed.max(elapsed);
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn base(&self) -> Instant {
        self.base
    }

    /// The instant `offset` after the base
    pub fn at(&self, offset: Duration) -> Instant {
        self.base + offset
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.elapsed
    }
}

/// A request to call the controller back after `delay`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelayedTask {
    pub id: TaskId,
    pub delay: Duration,
}

/// Single-slot holder for a controller's pending task
#[derive(Debug, Default)]
pub struct DelayedTaskSlot {
    tasks: SlotMap<TaskId, Duration>,
    current: Option<TaskId>,
}

impl DelayedTaskSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a new task, superseding any pending one
    pub fn post(&mut self, delay: Duration) -> DelayedTask {
        self.cancel();
        let id = self.tasks.insert(delay);
        self.current = Some(id);
        DelayedTask { id, delay }
    }

    /// Invalidate the pending task. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.current.take() {
            Some(id) => {
                self.tasks.remove(id);
                true
            }
            None => false,
        }
    }

    /// Consume the pending task if `id` is still current
    pub fn take_if_current(&mut self, id: TaskId) -> bool {
        if self.current != Some(id) {
            return false;
        }
        self.current = None;
        self.tasks.remove(id);
        true
    }

    pub fn pending(&self) -> Option<DelayedTask> {
        let id = self.current?;
        let delay = *self.tasks.get(id)?;
        Some(DelayedTask { id, delay })
    }

    pub fn is_pending(&self) -> bool {
        self.current.is_some()
    }
}

struct ScheduledTask {
    id: TaskId,
    due: Instant,
    seq: u64,
}

/// Deterministic runner for delayed tasks
///
/// Plays the frame driver's part in tests and simulations: it remembers when
/// each posted task becomes due and hands the ids back once time has passed.
/// It does not deduplicate; superseded ids are returned too and the controller
/// ignores them.
#[derive(Default)]
pub struct ManualTaskRunner {
    scheduled: SlotMap<ScheduledKey, ScheduledTask>,
    next_seq: u64,
}

impl ManualTaskRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `task` to become due `task.delay` after `now`
    pub fn post(&mut self, task: DelayedTask, now: Instant) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.scheduled.insert(ScheduledTask {
            id: task.id,
            due: now + task.delay,
            seq,
        });
    }

    /// Drop a scheduled task without running it
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.scheduled.len();
        self.scheduled.retain(|_, task| task.id != id);
        before != self.scheduled.len()
    }

    /// Remove and return every task due at or before `now`, earliest first
    pub fn take_due(&mut self, now: Instant) -> SmallVec<[TaskId; 2]> {
        let mut due: SmallVec<[(Instant, u64, ScheduledKey); 2]> = self
            .scheduled
            .iter()
            .filter(|(_, task)| task.due <= now)
            .map(|(key, task)| (task.due, task.seq, key))
            .collect();
        due.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

        due.into_iter()
            .filter_map(|(_, _, key)| self.scheduled.remove(key))
            .map(|task| task.id)
            .collect()
    }

    /// Earliest due time among scheduled tasks
    pub fn next_due(&self) -> Option<Instant> {
        self.scheduled.values().map(|task| task.due).min()
    }

    pub fn len(&self) -> usize {
        self.scheduled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scheduled.is_empty()
    }
}
