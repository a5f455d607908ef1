//! Pure interval-cycle state machine.
//!
//! [`TimerCore`] models the repeating work/break cycle and advances one
//! second at a time under [`TimerCore::decrement`]. It has no clock and no
//! task of its own; the scheduling wrapper in [`super::engine`] drives it.

use chrono::{Local, NaiveDateTime};

use crate::types::{IntervalKind, TimerSettings, TimerSnapshot};

// ============================================================================
// Transition
// ============================================================================

/// A completed interval transition, reported by [`TimerCore::decrement`] so
/// the engine can emit completion events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The interval that just finished
    pub completed: IntervalKind,
    /// The interval that is now counting down
    pub next: IntervalKind,
}

// ============================================================================
// TimerCore
// ============================================================================

/// The interval timer state machine.
///
/// Durations are derived from a [`TimerSettings`] snapshot once, at
/// construction; re-deriving them requires constructing a new core from new
/// settings. The cycle has no terminal state: it repeats forever until the
/// owning timer is canceled.
#[derive(Debug, Clone)]
pub struct TimerCore {
    /// Interval durations in seconds, fixed at construction
    work_seconds: u32,
    short_break_seconds: u32,
    long_break_seconds: u32,
    repeats_before_long_break: u32,

    running: bool,
    started_at: Option<NaiveDateTime>,
    ended_at: Option<NaiveDateTime>,

    current_interval: IntervalKind,
    seconds_remaining: u32,
    /// Work intervals left before the next long break
    repeats_remaining: u32,
    /// Monotone lifetime counter, never reset
    work_intervals_completed: u32,
}

impl TimerCore {
    /// Creates a core in the Work interval with a full repeat budget,
    /// not running, counters at zero, timestamps unset.
    pub fn new(settings: &TimerSettings) -> Self {
        Self {
            work_seconds: settings.work_minutes().saturating_mul(60),
            short_break_seconds: settings.short_break_minutes().saturating_mul(60),
            long_break_seconds: settings.long_break_minutes().saturating_mul(60),
            repeats_before_long_break: settings.repeats_before_long_break(),
            running: false,
            started_at: None,
            ended_at: None,
            current_interval: IntervalKind::Work,
            seconds_remaining: settings.work_minutes().saturating_mul(60),
            repeats_remaining: settings.repeats_before_long_break(),
            work_intervals_completed: 0,
        }
    }

    // ------------------------------------------------------------------------
    // Lifecycle markers
    // ------------------------------------------------------------------------

    /// Marks the timer running and records the start timestamp.
    pub fn mark_started(&mut self) {
        self.running = true;
        self.started_at = Some(Local::now().naive_local());
    }

    /// Pauses countdown. Ticks delivered while paused are wasted, not queued.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Resumes countdown after a pause.
    pub fn resume(&mut self) {
        self.running = true;
    }

    /// Marks the timer canceled and records the end timestamp.
    ///
    /// Repeated calls simply refresh `ended_at`.
    pub fn mark_canceled(&mut self) {
        self.running = false;
        self.ended_at = Some(Local::now().naive_local());
    }

    // ------------------------------------------------------------------------
    // State machine
    // ------------------------------------------------------------------------

    /// Advances the countdown by one second.
    ///
    /// No-op while not running. When the current interval reaches zero the
    /// transition table is applied and the resulting [`Transition`] returned;
    /// this is the only place the state machine advances.
    pub fn decrement(&mut self) -> Option<Transition> {
        if !self.running {
            return None;
        }

        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);

        if self.seconds_remaining == 0 {
            Some(self.next_interval())
        } else {
            None
        }
    }

    /// Applies the transition out of the current interval.
    ///
    /// - Work -> ShortBreak while more repeats remain, else Work -> LongBreak;
    ///   either way the repeat and lifetime counters are updated.
    /// - ShortBreak -> Work.
    /// - LongBreak -> Work with a full cycle reset (the lifetime counter is
    ///   NOT reset).
    pub fn next_interval(&mut self) -> Transition {
        let completed = self.current_interval;

        match completed {
            IntervalKind::Work => {
                self.repeats_remaining -= 1;
                self.work_intervals_completed += 1;
                if self.repeats_remaining == 0 {
                    self.init_long_break();
                } else {
                    self.init_short_break();
                }
            }
            IntervalKind::ShortBreak => {
                self.init_work();
            }
            IntervalKind::LongBreak => {
                // Full cycle reset: back to Work with the repeat budget restored.
                self.init_work();
                self.repeats_remaining = self.repeats_before_long_break;
            }
        }

        Transition {
            completed,
            next: self.current_interval,
        }
    }

    fn init_work(&mut self) {
        self.current_interval = IntervalKind::Work;
        self.seconds_remaining = self.work_seconds;
    }

    fn init_short_break(&mut self) {
        self.current_interval = IntervalKind::ShortBreak;
        self.seconds_remaining = self.short_break_seconds;
    }

    fn init_long_break(&mut self) {
        self.current_interval = IntervalKind::LongBreak;
        self.seconds_remaining = self.long_break_seconds;
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn started_at(&self) -> Option<NaiveDateTime> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<NaiveDateTime> {
        self.ended_at
    }

    pub fn current_interval(&self) -> IntervalKind {
        self.current_interval
    }

    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    pub fn repeats_remaining(&self) -> u32 {
        self.repeats_remaining
    }

    pub fn work_intervals_completed(&self) -> u32 {
        self.work_intervals_completed
    }

    pub fn work_seconds(&self) -> u32 {
        self.work_seconds
    }

    /// Fully completed cycles: one cycle is exactly one long-break period.
    pub fn total_cycles(&self) -> u32 {
        self.work_intervals_completed / self.repeats_before_long_break
    }

    /// Total work minutes completed so far, counting partial progress in a
    /// currently running Work interval without double-counting completed ones.
    pub fn total_work_minutes(&self) -> u64 {
        let mut seconds =
            u64::from(self.work_intervals_completed) * u64::from(self.work_seconds);
        if self.current_interval == IntervalKind::Work {
            seconds += u64::from(self.work_seconds - self.seconds_remaining);
        }
        seconds / 60
    }

    /// Builds the read-only per-tick view for the presentation layer.
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            current_interval: self.current_interval,
            seconds_remaining: self.seconds_remaining,
            repeats_remaining: self.repeats_remaining,
            work_intervals_completed: self.work_intervals_completed,
            total_cycles: self.total_cycles(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
