//! studytrack CLI - track study sessions with a built-in pomodoro timer
//!
//! The timer runs in the foreground with a live countdown:
//! - 25 minutes of focused work
//! - 5 minutes of short break
//! - a long break after 4 work intervals
//!
//! Stopping the timer records the run as a session in the tracker file.

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};

use studytrack::cli::{
    run_timer, ActivityCommands, Cli, Commands, Display, SessionCommands, SettingsCommands,
};
use studytrack::persistence::JsonStore;
use studytrack::tracker::{Activity, Session};

/// Main entry point
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    init_tracing();

    // Parse command line arguments
    let cli = Cli::parse();

    // Execute command
    if let Err(e) = execute(cli).await {
        Display::show_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber for logging.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Executes the CLI command.
async fn execute(cli: Cli) -> Result<()> {
    // Set verbose logging if requested
    if cli.verbose {
        tracing::info!("Verbose mode enabled");
    }

    // Completions need no tracker file
    if let Some(Commands::Completions { shell }) = &cli.command {
        generate_completions(*shell);
        return Ok(());
    }

    let store = match cli.data_file {
        Some(path) => JsonStore::new(path),
        None => JsonStore::new(JsonStore::default_path()),
    };
    let mut tracker = store.load()?;

    match cli.command {
        Some(Commands::Timer(args)) => {
            run_timer(&store, &mut tracker, args).await?;
        }
        Some(Commands::Settings { command }) => match command {
            SettingsCommands::Show => {
                Display::show_settings(tracker.timer_settings());
            }
            SettingsCommands::Set(args) => {
                if args.is_empty() {
                    bail!("nothing to change; pass at least one of --work, --short-break, --long-break, --repeats");
                }
                let mut settings = tracker.timer_settings().clone();
                if let Some(work) = args.work {
                    settings.set_work_minutes(work)?;
                }
                if let Some(short_break) = args.short_break {
                    settings.set_short_break_minutes(short_break)?;
                }
                if let Some(long_break) = args.long_break {
                    settings.set_long_break_minutes(long_break)?;
                }
                if let Some(repeats) = args.repeats {
                    settings.set_repeats_before_long_break(repeats)?;
                }
                tracker.set_timer_settings(settings);
                store.save(&tracker)?;
                Display::show_settings(tracker.timer_settings());
            }
        },
        Some(Commands::Activity { command }) => match command {
            ActivityCommands::Add { name } => {
                tracker.add_activity(Activity::new(name.clone())?)?;
                store.save(&tracker)?;
                Display::show_activity_added(&name);
            }
            ActivityCommands::List => {
                Display::show_activities(tracker.activities());
            }
        },
        Some(Commands::Session { command }) => match command {
            SessionCommands::Add(args) => {
                if let Some(name) = &args.activity {
                    if tracker.find_activity(name).is_none() {
                        bail!("no activity named '{name}'; add it first with 'activity add'");
                    }
                }
                let session = Session::new(args.details, args.start, args.end, args.activity)?;
                tracker.add_session(session.clone());
                store.save(&tracker)?;
                Display::show_session_recorded(&session);
            }
            SessionCommands::List { activity } => {
                let sessions = match &activity {
                    Some(name) => tracker.sessions_for_activity(Some(name)),
                    None => tracker.sessions().iter().enumerate().collect(),
                };
                Display::show_sessions(&sessions);
            }
            SessionCommands::Remove { index } => {
                let removed = tracker.remove_session(index)?;
                store.save(&tracker)?;
                Display::show_session_removed(&removed);
            }
        },
        Some(Commands::Completions { .. }) => unreachable!("handled above"),
        None => {
            // No command provided, show help
            Cli::command().print_help()?;
        }
    }

    Ok(())
}

/// Generates shell completion scripts.
fn generate_completions(shell: clap_complete::Shell) {
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut io::stdout());
}

// ============================================================================
// Tests
// ============================================================================
