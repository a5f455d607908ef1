//! Study session records.
//!
//! A plain session is a dated interval with free-form details. A session
//! produced by the interval timer additionally carries a [`PomodoroRecord`]:
//! the settings snapshot that drove the run and the work minutes it produced.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::TimerSettings;

use super::error::TrackerError;

// ============================================================================
// PomodoroRecord
// ============================================================================

/// Timer outcome attached to a session recorded from a pomodoro run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PomodoroRecord {
    /// The settings snapshot the timer ran with
    pub settings: TimerSettings,
    /// Total work minutes completed during the run
    pub work_minutes: u64,
}

impl PomodoroRecord {
    /// Full timer cycles completed during the run.
    pub fn cycles_completed(&self) -> u64 {
        (self.work_minutes / u64::from(self.settings.work_minutes()))
            / u64::from(self.settings.repeats_before_long_break())
    }
}

// ============================================================================
// Session
// ============================================================================

/// A recorded study session.
///
/// Timestamps are local wall-clock date-times and serialize as ISO-8601.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    details: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    activity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pomodoro: Option<PomodoroRecord>,
}

impl Session {
    /// Creates a plain session. `start` must not be after `end`
    /// (equal timestamps are allowed).
    pub fn new(
        details: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        activity: Option<String>,
    ) -> Result<Self, TrackerError> {
        if start > end {
            return Err(TrackerError::InvalidInterval);
        }
        Ok(Self {
            details: details.into(),
            start,
            end,
            activity,
            pomodoro: None,
        })
    }

    /// Creates a session recorded from a pomodoro timer run.
    pub fn with_pomodoro(
        details: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        activity: Option<String>,
        record: PomodoroRecord,
    ) -> Result<Self, TrackerError> {
        let mut session = Self::new(details, start, end, activity)?;
        session.pomodoro = Some(record);
        Ok(session)
    }

    pub fn details(&self) -> &str {
        &self.details
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// The activity name this session is filed under, or `""` if none.
    pub fn activity_name(&self) -> &str {
        self.activity.as_deref().unwrap_or("")
    }

    /// The attached timer outcome, if this session came from a pomodoro run.
    pub fn pomodoro(&self) -> Option<&PomodoroRecord> {
        self.pomodoro.as_ref()
    }

    pub fn is_pomodoro(&self) -> bool {
        self.pomodoro.is_some()
    }

    pub fn set_details(&mut self, details: impl Into<String>) {
        self.details = details.into();
    }

    pub fn set_activity(&mut self, activity: Option<String>) {
        self.activity = activity;
    }

    /// Wall-clock duration of the session in minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

// ============================================================================
// Tests
// ============================================================================
