//! Core data types for the study tracker.
//!
//! This module defines the data structures used for:
//! - Interval timer configuration with validation
//! - The interval kind enum driving the work/break cycle
//! - Read-only per-tick snapshots for presentation

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// SettingsError
// ============================================================================

/// Errors raised by [`TimerSettings`] construction and mutation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// A duration or repeat count was zero. The offending field is named;
    /// the settings value it was destined for is left untouched.
    #[error("{field} must be strictly positive")]
    NonPositiveValue {
        /// The field that failed validation
        field: &'static str,
    },
}

impl SettingsError {
    /// Returns the name of the field that failed validation.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::NonPositiveValue { field } => field,
        }
    }
}

// ============================================================================
// TimerSettings
// ============================================================================

/// Default work interval duration in minutes.
pub const DEFAULT_WORK_MINUTES: u32 = 25;
/// Default short break duration in minutes.
pub const DEFAULT_SHORT_BREAK_MINUTES: u32 = 5;
/// Default long break duration in minutes.
pub const DEFAULT_LONG_BREAK_MINUTES: u32 = 25;
/// Default number of work intervals before a long break.
pub const DEFAULT_REPEATS: u32 = 4;

/// Validated configuration for an interval timer.
///
/// All four values are strictly positive at all times: construction and every
/// setter re-validate before writing, so a failed mutation leaves the prior
/// value in place. Cloning produces an independent deep copy; an
/// [`IntervalTimer`](crate::timer::IntervalTimer) takes its own snapshot at
/// construction, so later edits never affect an in-progress run.
///
/// Note: "long break >= short break" is intentionally NOT enforced. The rule
/// is documented but has never been validated, and callers may rely on
/// short-heavy configurations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UncheckedSettings")]
pub struct TimerSettings {
    work_minutes: u32,
    short_break_minutes: u32,
    long_break_minutes: u32,
    repeats_before_long_break: u32,
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            work_minutes: DEFAULT_WORK_MINUTES,
            short_break_minutes: DEFAULT_SHORT_BREAK_MINUTES,
            long_break_minutes: DEFAULT_LONG_BREAK_MINUTES,
            repeats_before_long_break: DEFAULT_REPEATS,
        }
    }
}

impl TimerSettings {
    /// Creates settings from the four minute/count values.
    ///
    /// Each field is validated independently; the first invalid field is
    /// reported and no settings value is produced.
    pub fn new(
        work_minutes: u32,
        short_break_minutes: u32,
        long_break_minutes: u32,
        repeats_before_long_break: u32,
    ) -> Result<Self, SettingsError> {
        ensure_positive("work_minutes", work_minutes)?;
        ensure_positive("short_break_minutes", short_break_minutes)?;
        ensure_positive("long_break_minutes", long_break_minutes)?;
        ensure_positive("repeats_before_long_break", repeats_before_long_break)?;

        Ok(Self {
            work_minutes,
            short_break_minutes,
            long_break_minutes,
            repeats_before_long_break,
        })
    }

    /// Work interval duration in minutes.
    pub fn work_minutes(&self) -> u32 {
        self.work_minutes
    }

    /// Short break duration in minutes.
    pub fn short_break_minutes(&self) -> u32 {
        self.short_break_minutes
    }

    /// Long break duration in minutes.
    pub fn long_break_minutes(&self) -> u32 {
        self.long_break_minutes
    }

    /// Number of work intervals before a long break.
    pub fn repeats_before_long_break(&self) -> u32 {
        self.repeats_before_long_break
    }

    /// Sets the work duration; on failure the existing value is retained.
    pub fn set_work_minutes(&mut self, minutes: u32) -> Result<(), SettingsError> {
        ensure_positive("work_minutes", minutes)?;
        self.work_minutes = minutes;
        Ok(())
    }

    /// Sets the short break duration; on failure the existing value is retained.
    pub fn set_short_break_minutes(&mut self, minutes: u32) -> Result<(), SettingsError> {
        ensure_positive("short_break_minutes", minutes)?;
        self.short_break_minutes = minutes;
        Ok(())
    }

    /// Sets the long break duration; on failure the existing value is retained.
    pub fn set_long_break_minutes(&mut self, minutes: u32) -> Result<(), SettingsError> {
        ensure_positive("long_break_minutes", minutes)?;
        self.long_break_minutes = minutes;
        Ok(())
    }

    /// Sets the repeat count; on failure the existing value is retained.
    pub fn set_repeats_before_long_break(&mut self, repeats: u32) -> Result<(), SettingsError> {
        ensure_positive("repeats_before_long_break", repeats)?;
        self.repeats_before_long_break = repeats;
        Ok(())
    }
}

impl std::fmt::Display for TimerSettings {
    /// Canonical textual rendering, used by list views to label sessions:
    /// `"4 x 25 min, short: 5 min, long: 25 min"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} x {} min, short: {} min, long: {} min",
            self.repeats_before_long_break,
            self.work_minutes,
            self.short_break_minutes,
            self.long_break_minutes
        )
    }
}

/// Mirror of [`TimerSettings`] used to re-validate on deserialization.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UncheckedSettings {
    work_minutes: u32,
    short_break_minutes: u32,
    long_break_minutes: u32,
    repeats_before_long_break: u32,
}

impl TryFrom<UncheckedSettings> for TimerSettings {
    type Error = SettingsError;

    fn try_from(raw: UncheckedSettings) -> Result<Self, Self::Error> {
        Self::new(
            raw.work_minutes,
            raw.short_break_minutes,
            raw.long_break_minutes,
            raw.repeats_before_long_break,
        )
    }
}

/// Rejects values <= 0 with the offending field name.
fn ensure_positive(field: &'static str, value: u32) -> Result<(), SettingsError> {
    if value == 0 {
        return Err(SettingsError::NonPositiveValue { field });
    }
    Ok(())
}

// ============================================================================
// IntervalKind
// ============================================================================

/// One contiguous timed phase of the pomodoro cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalKind {
    /// A work interval
    Work,
    /// A short break between work intervals
    ShortBreak,
    /// The long break closing a full cycle
    LongBreak,
}

impl IntervalKind {
    /// Returns the string representation of the interval kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalKind::Work => "work",
            IntervalKind::ShortBreak => "short break",
            IntervalKind::LongBreak => "long break",
        }
    }

    /// Returns true for either break kind.
    pub fn is_break(&self) -> bool {
        matches!(self, IntervalKind::ShortBreak | IntervalKind::LongBreak)
    }
}

impl Default for IntervalKind {
    fn default() -> Self {
        IntervalKind::Work
    }
}

// ============================================================================
// TimerSnapshot
// ============================================================================

/// Read-only view of a running timer, published on every tick.
///
/// The presentation layer renders these; it never reaches into the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    /// Kind of the interval currently counting down
    pub current_interval: IntervalKind,
    /// Seconds left in the current interval
    pub seconds_remaining: u32,
    /// Work intervals left before the next long break
    pub repeats_remaining: u32,
    /// Work intervals completed over the timer's lifetime
    pub work_intervals_completed: u32,
    /// Fully completed cycles so far
    pub total_cycles: u32,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------------
    // TimerSettings Tests
    // ------------------------------------------------------------------------

    mod timer_settings_tests {
        use super::*;

        #[test]
        fn test_default_values() {
            let settings = TimerSettings::default();
            assert_eq!(settings.work_minutes(), 25);
            assert_eq!(settings.short_break_minutes(), 5);
            assert_eq!(settings.long_break_minutes(), 25);
            assert_eq!(settings.repeats_before_long_break(), 4);
        }

        #[test]
        fn test_new_valid() {
            let settings = TimerSettings::new(50, 10, 30, 2).unwrap();
            assert_eq!(settings.work_minutes(), 50);
            assert_eq!(settings.short_break_minutes(), 10);
            assert_eq!(settings.long_break_minutes(), 30);
            assert_eq!(settings.repeats_before_long_break(), 2);
        }

        #[test]
        fn test_new_zero_work_fails() {
            let result = TimerSettings::new(0, 5, 25, 4);
            assert_eq!(
                result.unwrap_err(),
                SettingsError::NonPositiveValue {
                    field: "work_minutes"
                }
            );
        }

        #[test]
        fn test_new_reports_first_invalid_field() {
            let result = TimerSettings::new(0, 0, 0, 0);
            assert_eq!(result.unwrap_err().field(), "work_minutes");

            let result = TimerSettings::new(25, 0, 0, 0);
            assert_eq!(result.unwrap_err().field(), "short_break_minutes");

            let result = TimerSettings::new(25, 5, 0, 0);
            assert_eq!(result.unwrap_err().field(), "long_break_minutes");

            let result = TimerSettings::new(25, 5, 25, 0);
            assert_eq!(result.unwrap_err().field(), "repeats_before_long_break");
        }

        #[test]
        fn test_new_minimum_values() {
            let settings = TimerSettings::new(1, 1, 1, 1).unwrap();
            assert_eq!(settings.work_minutes(), 1);
            assert_eq!(settings.repeats_before_long_break(), 1);
        }

        #[test]
        fn test_short_break_may_exceed_long_break() {
            // Known validation gap carried over on purpose: the "long >= short"
            // rule was declared upstream but never enforced.
            let settings = TimerSettings::new(25, 20, 10, 4);
            assert!(settings.is_ok());
        }

        #[test]
        fn test_setters_valid() {
            let mut settings = TimerSettings::default();
            settings.set_work_minutes(45).unwrap();
            settings.set_short_break_minutes(8).unwrap();
            settings.set_long_break_minutes(20).unwrap();
            settings.set_repeats_before_long_break(3).unwrap();

            assert_eq!(settings.work_minutes(), 45);
            assert_eq!(settings.short_break_minutes(), 8);
            assert_eq!(settings.long_break_minutes(), 20);
            assert_eq!(settings.repeats_before_long_break(), 3);
        }

        #[test]
        fn test_setter_failure_retains_prior_value() {
            let mut settings = TimerSettings::default();

            assert!(settings.set_work_minutes(0).is_err());
            assert_eq!(settings.work_minutes(), 25);

            assert!(settings.set_short_break_minutes(0).is_err());
            assert_eq!(settings.short_break_minutes(), 5);

            assert!(settings.set_long_break_minutes(0).is_err());
            assert_eq!(settings.long_break_minutes(), 25);

            assert!(settings.set_repeats_before_long_break(0).is_err());
            assert_eq!(settings.repeats_before_long_break(), 4);
        }

        #[test]
        fn test_value_equality() {
            let a = TimerSettings::new(25, 5, 25, 4).unwrap();
            let b = TimerSettings::default();
            let c = TimerSettings::new(25, 5, 25, 2).unwrap();

            assert_eq!(a, b);
            assert_ne!(a, c);
        }

        #[test]
        fn test_clone_is_independent() {
            let mut original = TimerSettings::default();
            let copy = original.clone();

            original.set_work_minutes(60).unwrap();

            assert_eq!(copy.work_minutes(), 25);
            assert_eq!(original.work_minutes(), 60);
        }

        #[test]
        fn test_display_format() {
            let settings = TimerSettings::default();
            assert_eq!(
                settings.to_string(),
                "4 x 25 min, short: 5 min, long: 25 min"
            );

            let settings = TimerSettings::new(2, 1, 2, 2).unwrap();
            assert_eq!(settings.to_string(), "2 x 2 min, short: 1 min, long: 2 min");
        }

        #[test]
        fn test_serialize_deserialize() {
            let settings = TimerSettings::new(30, 10, 20, 3).unwrap();
            let json = serde_json::to_string(&settings).unwrap();
            assert!(json.contains("\"workMinutes\":30"));
            assert!(json.contains("\"shortBreakMinutes\":10"));
            assert!(json.contains("\"longBreakMinutes\":20"));
            assert!(json.contains("\"repeatsBeforeLongBreak\":3"));

            let deserialized: TimerSettings = serde_json::from_str(&json).unwrap();
            assert_eq!(settings, deserialized);
        }

        #[test]
        fn test_deserialize_rejects_zero() {
            // Deserialization goes through the same validation as new()
            let json = r#"{"workMinutes":0,"shortBreakMinutes":5,"longBreakMinutes":25,"repeatsBeforeLongBreak":4}"#;
            let result: Result<TimerSettings, _> = serde_json::from_str(json);
            assert!(result.is_err());
        }

        #[test]
        fn test_error_display() {
            let err = SettingsError::NonPositiveValue {
                field: "work_minutes",
            };
            assert_eq!(err.to_string(), "work_minutes must be strictly positive");
        }
    }

    // ------------------------------------------------------------------------
    // IntervalKind Tests
    // ------------------------------------------------------------------------

    mod interval_kind_tests {
        use super::*;

        #[test]
        fn test_default_is_work() {
            assert_eq!(IntervalKind::default(), IntervalKind::Work);
        }

        #[test]
        fn test_as_str() {
            assert_eq!(IntervalKind::Work.as_str(), "work");
            assert_eq!(IntervalKind::ShortBreak.as_str(), "short break");
            assert_eq!(IntervalKind::LongBreak.as_str(), "long break");
        }

        #[test]
        fn test_is_break() {
            assert!(!IntervalKind::Work.is_break());
            assert!(IntervalKind::ShortBreak.is_break());
            assert!(IntervalKind::LongBreak.is_break());
        }

        #[test]
        fn test_serialize_deserialize() {
            let kind = IntervalKind::ShortBreak;
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, "\"short_break\"");

            let deserialized: IntervalKind = serde_json::from_str(&json).unwrap();
            assert_eq!(deserialized, IntervalKind::ShortBreak);
        }
    }

    // ------------------------------------------------------------------------
    // TimerSnapshot Tests
    // ------------------------------------------------------------------------

    mod timer_snapshot_tests {
        use super::*;

        #[test]
        fn test_serialize() {
            let snapshot = TimerSnapshot {
                current_interval: IntervalKind::Work,
                seconds_remaining: 1500,
                repeats_remaining: 4,
                work_intervals_completed: 0,
                total_cycles: 0,
            };

            let json = serde_json::to_string(&snapshot).unwrap();
            assert!(json.contains("\"currentInterval\":\"work\""));
            assert!(json.contains("\"secondsRemaining\":1500"));
            assert!(json.contains("\"repeatsRemaining\":4"));
        }
    }
}
