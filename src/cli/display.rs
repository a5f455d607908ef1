//! Display utilities for the studytrack CLI.
//!
//! This module provides formatted output for:
//! - Timer progress
//! - Settings, activity, and session listings
//! - Error messages

use std::io::Write;

use crate::timer::TimerEvent;
use crate::tracker::{Activity, Session};
use crate::types::{TimerSettings, TimerSnapshot};

// ============================================================================
// Display
// ============================================================================

/// Display utilities for CLI output.
pub struct Display;

impl Display {
    // ------------------------------------------------------------------------
    // Timer Output
    // ------------------------------------------------------------------------

    /// Shows the banner when a timer run begins.
    pub fn show_timer_started(settings: &TimerSettings) {
        println!("* Timer started ({settings})");
        println!("  Press Ctrl-C to stop and record the session");
    }

    /// Shows one timer event on the live countdown line.
    pub fn show_timer_event(event: &TimerEvent) {
        match event {
            TimerEvent::Started { snapshot } | TimerEvent::Tick { snapshot } => {
                Self::show_countdown(snapshot);
            }
            TimerEvent::IntervalCompleted {
                completed, next, ..
            } => {
                println!();
                println!("* {} finished, {} starts now", completed.as_str(), next.as_str());
            }
            TimerEvent::Paused => {
                println!();
                println!("|| Timer paused");
            }
            TimerEvent::Resumed => {
                println!("> Timer resumed");
            }
            TimerEvent::Canceled => {
                println!();
                println!("[] Timer stopped");
            }
        }
    }

    /// Redraws the countdown line in place.
    fn show_countdown(snapshot: &TimerSnapshot) {
        let (minutes, seconds) = Self::format_time(snapshot.seconds_remaining);
        print!(
            "\r{} {}:{:02}  (work intervals done: {}, until long break: {})   ",
            snapshot.current_interval.as_str(),
            minutes,
            seconds,
            snapshot.work_intervals_completed,
            snapshot.repeats_remaining
        );
        let _ = std::io::stdout().flush();
    }

    // ------------------------------------------------------------------------
    // Listings
    // ------------------------------------------------------------------------

    /// Shows the stored timer settings.
    pub fn show_settings(settings: &TimerSettings) {
        println!("Timer settings");
        println!("--------------");
        println!("Work interval:     {} min", settings.work_minutes());
        println!("Short break:       {} min", settings.short_break_minutes());
        println!("Long break:        {} min", settings.long_break_minutes());
        println!(
            "Repeats per cycle: {}",
            settings.repeats_before_long_break()
        );
    }

    /// Shows all activities, one per line.
    pub fn show_activities(activities: &[Activity]) {
        if activities.is_empty() {
            println!("No activities yet");
            return;
        }
        println!("Activities");
        println!("----------");
        for activity in activities {
            println!("  {}", activity.name());
        }
    }

    /// Shows a session listing. Each entry carries its position in the full
    /// session log, so the printed index feeds `session remove` directly even
    /// when the listing is filtered.
    pub fn show_sessions(sessions: &[(usize, &Session)]) {
        if sessions.is_empty() {
            println!("No sessions recorded");
            return;
        }
        println!("Sessions");
        println!("--------");
        for (index, session) in sessions {
            println!("  [{index}] {}", Self::format_session(session));
        }
    }

    /// Shows a confirmation after a session was recorded.
    pub fn show_session_recorded(session: &Session) {
        println!("* Session recorded: {}", Self::format_session(session));
    }

    /// Shows a confirmation after a session was removed.
    pub fn show_session_removed(session: &Session) {
        println!("* Session removed: {}", Self::format_session(session));
    }

    /// Shows a confirmation after an activity was added.
    pub fn show_activity_added(name: &str) {
        println!("* Activity '{name}' added");
    }

    /// Shows an error message.
    pub fn show_error(message: &str) {
        eprintln!("Error: {message}");
    }

    // ------------------------------------------------------------------------
    // Formatting
    // ------------------------------------------------------------------------

    /// One-line summary of a session for listings.
    fn format_session(session: &Session) -> String {
        let mut line = format!(
            "{} .. {} ({} min)",
            session.start().format("%Y-%m-%d %H:%M"),
            session.end().format("%Y-%m-%d %H:%M"),
            session.duration_minutes()
        );
        if !session.activity_name().is_empty() {
            line.push_str(&format!(" [{}]", session.activity_name()));
        }
        if let Some(record) = session.pomodoro() {
            line.push_str(&format!(
                " pomodoro: {} work min, {} cycles",
                record.work_minutes,
                record.cycles_completed()
            ));
        }
        if !session.details().is_empty() {
            line.push_str(&format!(" - {}", session.details()));
        }
        line
    }

    /// Formats remaining seconds as (minutes, seconds).
    fn format_time(total_seconds: u32) -> (u32, u32) {
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;
        (minutes, seconds)
    }
}

// ============================================================================
// Tests
// ============================================================================
