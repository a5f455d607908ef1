//! The study tracker: activities, sessions, and the current timer settings.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::TimerSettings;

use super::activity::Activity;
use super::error::TrackerError;
use super::session::Session;

/// A personal study tracker.
///
/// Owns the activity list (names unique), the session log, and the timer
/// settings used for new pomodoro runs. Running timer state is never stored
/// here; only finished runs enter the session log.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyTracker {
    #[serde(default)]
    activities: Vec<Activity>,
    #[serde(default)]
    sessions: Vec<Session>,
    #[serde(default)]
    timer_settings: TimerSettings,
}

impl StudyTracker {
    /// Creates an empty tracker with default timer settings.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------------
    // Activities
    // ------------------------------------------------------------------------

    /// Adds an activity; names must be unique.
    pub fn add_activity(&mut self, activity: Activity) -> Result<(), TrackerError> {
        if self.activities.iter().any(|a| a.name() == activity.name()) {
            return Err(TrackerError::DuplicateActivity {
                name: activity.name().to_string(),
            });
        }
        debug!(name = activity.name(), "activity added");
        self.activities.push(activity);
        Ok(())
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn find_activity(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name() == name)
    }

    // ------------------------------------------------------------------------
    // Sessions
    // ------------------------------------------------------------------------

    pub fn add_session(&mut self, session: Session) {
        debug!(
            pomodoro = session.is_pomodoro(),
            activity = session.activity_name(),
            "session added"
        );
        self.sessions.push(session);
    }

    /// Removes and returns the session at `index`.
    pub fn remove_session(&mut self, index: usize) -> Result<Session, TrackerError> {
        if index >= self.sessions.len() {
            return Err(TrackerError::SessionNotFound { index });
        }
        debug!(index, "session removed");
        Ok(self.sessions.remove(index))
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Sessions filed under the given activity name, paired with their
    /// position in the session log; `None` matches sessions with no activity.
    ///
    /// The returned indices are log positions, so they remain valid inputs
    /// for [`remove_session`](Self::remove_session) even on a filtered view.
    pub fn sessions_for_activity(&self, activity: Option<&str>) -> Vec<(usize, &Session)> {
        let name = activity.unwrap_or("");
        self.sessions
            .iter()
            .enumerate()
            .filter(|(_, s)| s.activity_name() == name)
            .collect()
    }

    // ------------------------------------------------------------------------
    // Settings
    // ------------------------------------------------------------------------

    pub fn timer_settings(&self) -> &TimerSettings {
        &self.timer_settings
    }

    pub fn set_timer_settings(&mut self, settings: TimerSettings) {
        self.timer_settings = settings;
    }
}

// ============================================================================
// Tests
// ============================================================================
