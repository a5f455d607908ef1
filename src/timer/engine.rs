//! Scheduling wrapper around the interval state machine.
//!
//! [`IntervalTimer`] owns a [`TimerCore`] behind a mutex and drives it from a
//! per-instance tokio task ticking once per second. State changes are
//! published as [`TimerEvent`]s over an unbounded channel so the presentation
//! layer never needs a live scheduler to be tested.
//!
//! The timer owns its schedule: `cancel` signals the tick task and awaits it,
//! so no tick can fire after `cancel` returns.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tokio::sync::{mpsc, watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Duration, Instant, MissedTickBehavior};

use crate::types::{IntervalKind, TimerSettings, TimerSnapshot};

use super::state::TimerCore;

/// Tick period of the schedule.
const TICK_PERIOD: Duration = Duration::from_secs(1);

// ============================================================================
// TimerEvent
// ============================================================================

/// Timer events published to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerEvent {
    /// The schedule began; carries the initial state.
    Started {
        /// State at the moment the schedule began
        snapshot: TimerSnapshot,
    },
    /// One second elapsed. Emitted on every tick, including while paused
    /// (paused ticks are wasted: the snapshot does not change).
    Tick {
        /// State after the decrement step
        snapshot: TimerSnapshot,
    },
    /// A tick exhausted the current interval and the cycle advanced.
    IntervalCompleted {
        /// The interval that just finished
        completed: IntervalKind,
        /// The interval now counting down
        next: IntervalKind,
        /// Lifetime work-interval counter after the transition
        work_intervals_completed: u32,
    },
    /// Countdown paused; the schedule keeps ticking.
    Paused,
    /// Countdown resumed.
    Resumed,
    /// The schedule was stopped and the end timestamp recorded.
    Canceled,
}

// ============================================================================
// IntervalTimer
// ============================================================================

/// The interval timer: a [`TimerCore`] plus its own cancelable schedule.
///
/// Constructed from a [`TimerSettings`] snapshot; durations are fixed for the
/// timer's lifetime. One timer runs at most one schedule; calling
/// [`start`](Self::start) again replaces the schedule (the previous tick task
/// is shut down first), which is the caller's responsibility to avoid.
pub struct IntervalTimer {
    core: Arc<Mutex<TimerCore>>,
    event_tx: mpsc::UnboundedSender<TimerEvent>,
    shutdown_tx: Option<watch::Sender<bool>>,
    tick_task: Option<JoinHandle<()>>,
}

impl IntervalTimer {
    /// Creates a timer from a settings snapshot and an event channel.
    ///
    /// The timer starts out idle: no schedule, not running.
    pub fn new(settings: &TimerSettings, event_tx: mpsc::UnboundedSender<TimerEvent>) -> Self {
        Self {
            core: Arc::new(Mutex::new(TimerCore::new(settings))),
            event_tx,
            shutdown_tx: None,
            tick_task: None,
        }
    }

    /// Starts the one-second schedule and records the start timestamp.
    ///
    /// Each tick runs the decrement step first, then publishes events.
    pub async fn start(&mut self) -> Result<()> {
        // A second start replaces the schedule; never leave two tickers alive.
        self.stop_schedule().await;

        let snapshot = {
            let mut core = self.core.lock().await;
            core.mark_started();
            core.snapshot()
        };

        self.event_tx
            .send(TimerEvent::Started { snapshot })
            .context("failed to send started event")?;

        let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
        let core = Arc::clone(&self.core);
        let event_tx = self.event_tx.clone();

        let task = tokio::spawn(async move {
            // First tick one full period after start, like a real wall clock.
            let mut ticker = interval_at(Instant::now() + TICK_PERIOD, TICK_PERIOD);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = shutdown_rx.changed() => break,
                    _ = ticker.tick() => {
                        let (transition, snapshot) = {
                            let mut core = core.lock().await;
                            let transition = core.decrement();
                            (transition, core.snapshot())
                        };

                        if let Some(t) = transition {
                            let event = TimerEvent::IntervalCompleted {
                                completed: t.completed,
                                next: t.next,
                                work_intervals_completed: snapshot.work_intervals_completed,
                            };
                            if event_tx.send(event).is_err() {
                                break;
                            }
                        }

                        if event_tx.send(TimerEvent::Tick { snapshot }).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        self.shutdown_tx = Some(shutdown_tx);
        self.tick_task = Some(task);
        Ok(())
    }

    /// Pauses the countdown. The schedule keeps ticking; ticks are wasted.
    pub async fn pause(&self) -> Result<()> {
        self.core.lock().await.pause();
        self.event_tx
            .send(TimerEvent::Paused)
            .context("failed to send paused event")?;
        Ok(())
    }

    /// Resumes the countdown after a pause.
    pub async fn resume(&self) -> Result<()> {
        self.core.lock().await.resume();
        self.event_tx
            .send(TimerEvent::Resumed)
            .context("failed to send resumed event")?;
        Ok(())
    }

    /// Stops the schedule and records the end timestamp.
    ///
    /// The tick task is awaited before returning, so no tick fires afterward.
    /// Safe to call repeatedly: later calls refresh the end timestamp.
    pub async fn cancel(&mut self) -> Result<()> {
        self.core.lock().await.mark_canceled();
        self.stop_schedule().await;
        self.event_tx
            .send(TimerEvent::Canceled)
            .context("failed to send canceled event")?;
        Ok(())
    }

    /// Signals the tick task and waits for it to finish.
    async fn stop_schedule(&mut self) {
        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            let _ = shutdown_tx.send(true);
        }
        if let Some(task) = self.tick_task.take() {
            let _ = task.await;
        }
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Current read-only state view.
    pub async fn snapshot(&self) -> TimerSnapshot {
        self.core.lock().await.snapshot()
    }

    pub async fn is_running(&self) -> bool {
        self.core.lock().await.is_running()
    }

    pub async fn started_at(&self) -> Option<NaiveDateTime> {
        self.core.lock().await.started_at()
    }

    pub async fn ended_at(&self) -> Option<NaiveDateTime> {
        self.core.lock().await.ended_at()
    }

    /// Fully completed cycles so far.
    pub async fn total_cycles(&self) -> u32 {
        self.core.lock().await.total_cycles()
    }

    /// Total work minutes completed, including partial progress in a
    /// currently running work interval.
    pub async fn total_work_minutes(&self) -> u64 {
        self.core.lock().await.total_work_minutes()
    }
}

// ============================================================================
// Tests
// ============================================================================
