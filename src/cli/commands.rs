//! Command definitions for the studytrack CLI.
//!
//! Uses clap derive macro for argument parsing.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};

// ============================================================================
// CLI Structure
// ============================================================================

/// studytrack - a study-session tracker with a built-in pomodoro timer
#[derive(Parser, Debug)]
#[command(
    name = "studytrack",
    version,
    about = "Track study sessions and run pomodoro timers from the terminal",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the tracker data file (defaults to the platform data dir)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// ============================================================================
// Subcommands
// ============================================================================

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the interval timer with the stored settings; Ctrl-C ends the run
    /// and records a pomodoro session
    Timer(TimerArgs),

    /// Show or change the stored timer settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },

    /// Manage activities that sessions can be filed under
    Activity {
        #[command(subcommand)]
        command: ActivityCommands,
    },

    /// Manage recorded study sessions
    Session {
        #[command(subcommand)]
        command: SessionCommands,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell type for completion script
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

// ============================================================================
// Timer Command Arguments
// ============================================================================

/// Arguments for the timer command
#[derive(Args, Debug, Clone)]
pub struct TimerArgs {
    /// Details to record on the session
    #[arg(short, long, default_value = "pomodoro run", value_parser = validate_details)]
    pub details: String,

    /// Activity to file the session under (must already exist)
    #[arg(short, long)]
    pub activity: Option<String>,
}

// ============================================================================
// Settings Subcommands
// ============================================================================

/// Settings operations
#[derive(Subcommand, Debug, Clone)]
pub enum SettingsCommands {
    /// Show the stored timer settings
    Show,

    /// Change one or more settings values (minutes must be positive)
    Set(SettingsSetArgs),
}

/// Arguments for settings set; values are validated by the settings type,
/// so a zero is rejected with the offending field named.
#[derive(Args, Debug, Clone, Default)]
pub struct SettingsSetArgs {
    /// Work interval duration in minutes
    #[arg(short, long)]
    pub work: Option<u32>,

    /// Short break duration in minutes
    #[arg(short, long)]
    pub short_break: Option<u32>,

    /// Long break duration in minutes
    #[arg(short, long)]
    pub long_break: Option<u32>,

    /// Number of work intervals before a long break
    #[arg(short, long)]
    pub repeats: Option<u32>,
}

impl SettingsSetArgs {
    /// Returns true when no field was given.
    pub fn is_empty(&self) -> bool {
        self.work.is_none()
            && self.short_break.is_none()
            && self.long_break.is_none()
            && self.repeats.is_none()
    }
}

// ============================================================================
// Activity Subcommands
// ============================================================================

/// Activity operations
#[derive(Subcommand, Debug, Clone)]
pub enum ActivityCommands {
    /// Add a new activity
    Add {
        /// Activity name (must be unique and non-empty)
        name: String,
    },

    /// List all activities
    List,
}

// ============================================================================
// Session Subcommands
// ============================================================================

/// Session operations
#[derive(Subcommand, Debug, Clone)]
pub enum SessionCommands {
    /// Record a past study session by hand
    Add(SessionAddArgs),

    /// List recorded sessions
    List {
        /// Only sessions filed under this activity
        #[arg(short, long)]
        activity: Option<String>,
    },

    /// Remove the session at the given index (as shown by list)
    Remove {
        /// Session index
        index: usize,
    },
}

/// Arguments for session add
#[derive(Args, Debug, Clone)]
pub struct SessionAddArgs {
    /// Details describing the session
    #[arg(short, long, value_parser = validate_details)]
    pub details: String,

    /// Activity to file the session under (must already exist)
    #[arg(short, long)]
    pub activity: Option<String>,

    /// Start of the session, e.g. 2026-03-14T09:00
    #[arg(short, long, value_parser = parse_datetime)]
    pub start: NaiveDateTime,

    /// End of the session, e.g. 2026-03-14T10:30
    #[arg(short, long, value_parser = parse_datetime)]
    pub end: NaiveDateTime,
}

// ============================================================================
// Validation Functions
// ============================================================================

/// Validates session details.
///
/// - Must not be empty
/// - Must not exceed 200 characters
fn validate_details(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("details must not be empty".to_string());
    }
    if s.chars().count() > 200 {
        return Err("details must be at most 200 characters".to_string());
    }
    Ok(s.to_string())
}

/// Parses a local date-time in ISO-8601 form, with or without seconds.
fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|_| format!("invalid date-time '{s}', expected e.g. 2026-03-14T09:00"))
}

// ============================================================================
// Tests
// ============================================================================
