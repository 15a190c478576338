//! The timer port.
//!
//! Every delayed action the page takes is a [`TimerTask`] scheduled through a
//! [`Scheduler`], which hands back a [`TimerId`] that can be cancelled. The
//! browser scheduler (`web::timer`) backs each id with a `gloo_timers`
//! timeout; [`ManualScheduler`] is a virtual clock for tests.
//!
//! A timer can fire and be cancelled before its task is handled (the browser
//! queues fired tasks on the app's message channel). [`Scheduler::complete`]
//! is the single place that decides whether a fired task is still live.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::collections::HashSet;

use crate::behavior::notify::NotificationId;

/// Handle to a scheduled timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Work a timer performs when it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerTask {
    /// Reveal the next character of the typing effect.
    TypeNext,
    NotificationSlideIn(NotificationId),
    /// Start the slide-out of a notification nobody closed.
    NotificationExpire(NotificationId),
    /// Detach a notification once its slide-out has finished.
    NotificationDetach(NotificationId),
}

/// Schedules cancellable one-shot timers.
pub trait Scheduler {
    fn schedule(&mut self, delay_ms: u32, task: TimerTask) -> TimerId;
    /// Cancel `id`. Cancelling a fired or unknown timer is a no-op.
    fn cancel(&mut self, id: TimerId);
    /// Retire a fired timer, returning `false` if it was cancelled meanwhile.
    fn complete(&mut self, id: TimerId) -> bool;
}

#[derive(Clone, Debug)]
struct Pending {
    due_ms: u64,
    id: TimerId,
    task: TimerTask,
}

/// Deterministic scheduler driven by an explicit clock.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_id: u64,
    pending: Vec<Pending>,
    fired: HashSet<TimerId>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds.
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Move the clock forward without firing anything.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Number of timers waiting to fire.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.pending.iter().any(|p| p.id == id)
    }

    /// Fire the earliest timer due at or before `until_ms`, advancing the
    /// clock to its due time. Ties fire in scheduling order.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<(TimerId, TimerTask)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_ms <= until_ms)
            .min_by_key(|(_, p)| (p.due_ms, p.id))
            .map(|(i, _)| i)?;
        let timer = self.pending.remove(index);
        self.now_ms = self.now_ms.max(timer.due_ms);
        self.fired.insert(timer.id);
        Some((timer.id, timer.task))
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, delay_ms: u32, task: TimerTask) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push(Pending { due_ms: self.now_ms + u64::from(delay_ms), id, task });
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|p| p.id != id);
        self.fired.remove(&id);
    }

    fn complete(&mut self, id: TimerId) -> bool {
        self.fired.remove(&id)
    }
}
