//! CLI module for the studytrack command.
//!
//! This module contains:
//! - Command definitions (clap)
//! - Display utilities for formatted output
//! - The interactive timer run

pub mod commands;
pub mod display;
pub mod run;

pub use commands::{
    ActivityCommands, Cli, Commands, SessionAddArgs, SessionCommands, SettingsCommands,
    SettingsSetArgs, TimerArgs,
};
pub use display::Display;
pub use run::run_timer;
