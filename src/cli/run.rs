//! Interactive timer run.
//!
//! Drives an [`IntervalTimer`] in the foreground: the timer's events render a
//! live countdown, and Ctrl-C stops the run and records it as a pomodoro
//! session in the tracker.

use anyhow::{bail, Context, Result};
use tokio::sync::mpsc;
use tracing::info;

use crate::persistence::JsonStore;
use crate::timer::IntervalTimer;
use crate::tracker::{PomodoroRecord, Session, StudyTracker};

use super::commands::TimerArgs;
use super::display::Display;

/// Runs the timer until Ctrl-C, then records the session and saves.
pub async fn run_timer(
    store: &JsonStore,
    tracker: &mut StudyTracker,
    args: TimerArgs,
) -> Result<()> {
    if let Some(name) = &args.activity {
        if tracker.find_activity(name).is_none() {
            bail!("no activity named '{name}'; add it first with 'activity add'");
        }
    }

    let settings = tracker.timer_settings().clone();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let mut timer = IntervalTimer::new(&settings, event_tx);

    timer.start().await?;
    Display::show_timer_started(&settings);
    info!(settings = %settings, "timer run started");

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            event = event_rx.recv() => match event {
                Some(event) => Display::show_timer_event(&event),
                None => break,
            },
        }
    }

    timer.cancel().await?;
    // Ticks queued before the cancel are no longer worth rendering
    while event_rx.try_recv().is_ok() {}
    Display::show_timer_event(&crate::timer::TimerEvent::Canceled);

    let started_at = timer
        .started_at()
        .await
        .context("timer has no start timestamp")?;
    let ended_at = timer
        .ended_at()
        .await
        .context("timer has no end timestamp")?;
    let work_minutes = timer.total_work_minutes().await;

    let record = PomodoroRecord {
        settings,
        work_minutes,
    };
    let session = Session::with_pomodoro(
        args.details,
        started_at,
        ended_at,
        args.activity,
        record,
    )?;

    tracker.add_session(session.clone());
    store.save(tracker)?;
    info!(work_minutes, "timer run recorded");
    Display::show_session_recorded(&session);

    Ok(())
}
