//! Interval timer: state machine and scheduling.
//!
//! - `state`: the pure work/break cycle state machine
//! - `engine`: the per-instance one-second schedule and event stream

pub mod engine;
pub mod state;

pub use engine::{IntervalTimer, TimerEvent};
pub use state::{TimerCore, Transition};
