//! Tick scheduling capability handed to the engine.
//!
//! The engine never sleeps or spawns timers itself. It tells a [`Scheduler`]
//! when ticks should flow and at what interval, and whoever owns the clock
//! calls [`GameEngine::tick`](crate::GameEngine::tick) when one is due.

use std::time::{Duration, Instant};

pub trait Scheduler {
    /// Start delivering ticks every `interval`, replacing any armed timer.
    fn arm(&mut self, interval: Duration);

    /// Stop delivering ticks. Must take effect before it returns: no tick
    /// armed earlier may be delivered afterwards.
    fn disarm(&mut self);
}

/// Deadline timer for a single-threaded poll loop.
///
/// The loop asks [`PollTimer::due`] how long it may block waiting for input
/// and whether a tick should run now.
#[derive(Debug, Default)]
pub struct PollTimer {
    interval: Option<Duration>,
    next: Option<Instant>,
}

impl PollTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    /// Time left until the next tick, or `None` while disarmed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next.map(|next| next.saturating_duration_since(now))
    }

    /// Returns true once per elapsed interval. Missed deadlines are not
    /// replayed: the next deadline is counted from `now`.
    pub fn due(&mut self, now: Instant) -> bool {
        match (self.interval, self.next) {
            (Some(interval), Some(next)) if now >= next => {
                self.next = Some(now + interval);
                true
            }
            _ => false,
        }
    }

    fn arm_at(&mut self, interval: Duration, now: Instant) {
        self.interval = Some(interval);
        self.next = Some(now + interval);
    }
}

impl Scheduler for PollTimer {
    fn arm(&mut self, interval: Duration) {
        self.arm_at(interval, Instant::now());
    }

    fn disarm(&mut self) {
        self.interval = None;
        self.next = None;
    }
}

/// One call made on a [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerCall {
    Arm(Duration),
    Disarm,
}

/// Scheduler driven by hand: it records what the engine asked for and
/// leaves calling `tick` to the owner. Used by headless drivers and tests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    armed: Option<Duration>,
    calls: Vec<SchedulerCall>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interval of the currently armed timer.
    pub fn armed(&self) -> Option<Duration> {
        self.armed
    }

    pub fn calls(&self) -> &[SchedulerCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }
}

impl Scheduler for ManualScheduler {
    fn arm(&mut self, interval: Duration) {
        self.armed = Some(interval);
        self.calls.push(SchedulerCall::Arm(interval));
    }

    fn disarm(&mut self) {
        self.armed = None;
        self.calls.push(SchedulerCall::Disarm);
    }
}
