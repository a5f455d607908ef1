//! studytrack - a study-session tracker with a built-in pomodoro timer.
//!
//! The crate is split into:
//! - [`types`]: timer settings, interval kinds, and state snapshots
//! - [`timer`]: the interval state machine and its tokio tick schedule
//! - [`tracker`]: activities and recorded study sessions
//! - [`persistence`]: the JSON tracker file
//! - [`cli`]: command definitions and terminal output

pub mod cli;
pub mod persistence;
pub mod timer;
pub mod tracker;
pub mod types;

pub use persistence::{JsonStore, StoreError};
pub use timer::{IntervalTimer, TimerCore, TimerEvent, Transition};
pub use tracker::{Activity, PomodoroRecord, Session, StudyTracker, TrackerError};
pub use types::{IntervalKind, SettingsError, TimerSettings, TimerSnapshot};
