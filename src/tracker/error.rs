//! Error types for the study-record layer.

use thiserror::Error;

/// Errors raised by record construction and tracker mutation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// An activity name was empty.
    #[error("activity name must not be empty")]
    EmptyName,

    /// An activity with the same name already exists.
    #[error("activity with name '{name}' already exists")]
    DuplicateActivity {
        /// The conflicting name
        name: String,
    },

    /// A session's start timestamp was after its end timestamp.
    #[error("session start must not be after its end")]
    InvalidInterval,

    /// A session index was out of range.
    #[error("no session at index {index}")]
    SessionNotFound {
        /// The out-of-range index
        index: usize,
    },
}
