//! CoderKeys - programmer keyboard in the terminal
//!
//! Runs the interactive keyboard when no subcommand is given, otherwise one
//! of the headless commands.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use coderkeys::cli::{self, CategoryArgs, ConfigArgs, LayoutArgs, TypeArgs};
use coderkeys::config::Config;
use coderkeys::constants::{APP_NAME, LOG_FILE_NAME};
use coderkeys::logging::{self, LogTarget};
use coderkeys::tui;

/// CoderKeys - programmer keyboard in the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Use this configuration file instead of the default location
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the rows of a keyboard page
    Layout(LayoutArgs),
    /// Replay key presses and print the resulting text
    Type(TypeArgs),
    /// Print the color category of key identifiers
    Category(CategoryArgs),
    /// Inspect or edit the configuration
    Config(ConfigArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        return match run_terminal(cli.config.as_deref(), cli.verbose) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e:#}");
                ExitCode::FAILURE
            }
        };
    };

    if let Err(e) = logging::init(LogTarget::Stderr, cli.verbose) {
        eprintln!("Warning: {e:#}");
    }

    let config_path = cli.config.as_deref();
    let result = match command {
        Command::Layout(args) => args.execute(config_path),
        Command::Type(args) => args.execute(config_path),
        Command::Category(args) => args.execute(config_path),
        Command::Config(args) => args.execute(config_path),
    };

    match result {
        Ok(()) => cli::ExitCode::Success.into(),
        Err(e) => {
            eprintln!("Error: {e}");
            e.exit_code().into()
        }
    }
}

/// Runs the interactive keyboard until the user quits.
fn run_terminal(config_path: Option<&Path>, verbose: bool) -> Result<()> {
    let log_dir = config_path
        .and_then(Path::parent)
        .filter(|dir| !dir.as_os_str().is_empty());
    let log_path = match log_dir {
        Some(dir) => dir.join(LOG_FILE_NAME),
        None => Config::config_dir()?.join(LOG_FILE_NAME),
    };
    logging::init(LogTarget::File(&log_path), verbose)?;

    let config = Config::load_or_default(config_path);

    let mut terminal = tui::setup_terminal()?;
    let mut state = tui::AppState::new(config);
    let result = tui::run_tui(&mut state, &mut terminal);
    tui::restore_terminal(terminal)?;
    result?;

    tracing::debug!("{APP_NAME} exited cleanly");
    Ok(())
}
