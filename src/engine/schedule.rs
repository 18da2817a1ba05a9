//! Cancellable delayed tasks on a logical clock.
//!
//! The queue never reads wall time: the owner passes the current time to
//! `pop_due`. Every handle carries the queue's epoch; `cancel_all` bumps the
//! epoch, so a handle issued before it can no longer be cancelled, queried
//! or delivered.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Identifies one scheduled task.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskHandle {
    pub id: u64,
    pub epoch: u64,
}

impl std::fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({}@{})", self.id, self.epoch)
    }
}

/// A task waiting for its deadline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTask<T> {
    pub handle: TaskHandle,
    pub due: Duration,
    pub payload: T,
}

/// Pending tasks ordered by deadline, then by scheduling order.
#[derive(Clone, Debug)]
pub struct TaskQueue<T> {
    tasks: Vec<ScheduledTask<T>>,
    next_id: u64,
    epoch: u64,
}

impl<T> Default for TaskQueue<T> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
            epoch: 0,
        }
    }
}

impl<T> TaskQueue<T> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `payload` to become due at `due`.
    pub fn schedule(&mut self, due: Duration, payload: T) -> TaskHandle {
        let handle = TaskHandle {
            id: self.next_id,
            epoch: self.epoch,
        };
        self.next_id += 1;

        // Stable insert keeps equal deadlines in scheduling order.
        let pos = self.tasks.partition_point(|t| t.due <= due);
        self.tasks.insert(pos, ScheduledTask { handle, due, payload });
        handle
    }

    /// Cancel one task. Returns false if it already ran or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        if handle.epoch != self.epoch {
            return false;
        }
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }

    /// Cancel everything and invalidate all outstanding handles.
    ///
    /// Returns how many tasks were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.tasks.len();
        self.tasks.clear();
        self.epoch += 1;
        dropped
    }

    /// Check if a task is still waiting.
    #[must_use]
    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        handle.epoch == self.epoch && self.tasks.iter().any(|t| t.handle == handle)
    }

    /// Remove and return every task due at or before `now`, earliest first.
    pub fn pop_due(&mut self, now: Duration) -> Vec<ScheduledTask<T>> {
        let split = self.tasks.partition_point(|t| t.due <= now);
        self.tasks.drain(..split).collect()
    }

    /// Remove and return every task regardless of deadline.
    pub fn drain_all(&mut self) -> Vec<ScheduledTask<T>> {
        self.tasks.drain(..).collect()
    }

    /// Earliest deadline, if any task is pending.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.tasks.first().map(|t| t.due)
    }

    /// Current epoch.
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
