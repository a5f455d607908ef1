//! Study records: activities, sessions and the tracker that owns them.

pub mod activity;
pub mod error;
pub mod session;
pub mod tracker;

pub use activity::Activity;
pub use error::TrackerError;
pub use session::{PomodoroRecord, Session};
pub use tracker::StudyTracker;
