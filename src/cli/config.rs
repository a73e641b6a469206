//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::cli::load_config;
use crate::config::Config;
use clap::{Args, Subcommand};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the configuration file location
    Path,
    /// Set a configuration value
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set a configuration value
#[derive(Args, Debug)]
pub struct ConfigSetArgs {
    /// Dotted key, e.g. keyboard.preset, ui.theme_mode or colors.digit
    #[arg(value_name = "KEY")]
    key: String,

    /// New value; `default` removes a color override
    #[arg(value_name = "VALUE")]
    value: String,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    path: String,
    keyboard: KeyboardOutput,
    ui: UiOutput,
    colors: BTreeMap<String, String>,
}

#[derive(Serialize, Debug)]
struct KeyboardOutput {
    preset: String,
    mode_toggle: bool,
    shift_auto_reset: bool,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    show_help_on_startup: bool,
}

fn resolve_path(config_path: Option<&Path>) -> CliResult<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_file_path()
            .map_err(|e| CliError::io(format!("Failed to locate configuration: {e}"))),
    }
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(config_path),
            ConfigCommand::Path => {
                println!("{}", resolve_path(config_path)?.display());
                Ok(())
            }
            ConfigCommand::Set(args) => args.execute(config_path),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let path = resolve_path(config_path)?;

        if self.json {
            output_json(&config, &path)
        } else {
            output_human_readable(&config, &path);
            Ok(())
        }
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let path = resolve_path(config_path)?;
        let mut config = load_config(Some(&path))?;

        config
            .set_value(&self.key, &self.value)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;

        config
            .save_to(&path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        tracing::info!(key = %self.key, value = %self.value, "configuration updated");
        println!("Configuration updated successfully.");

        Ok(())
    }
}

/// Output configuration in JSON format
fn output_json(config: &Config, path: &Path) -> CliResult<()> {
    let output = ConfigOutput {
        path: path.to_string_lossy().to_string(),
        keyboard: KeyboardOutput {
            preset: config.keyboard.preset.to_string(),
            mode_toggle: config.keyboard.mode_toggle,
            shift_auto_reset: config.keyboard.shift_auto_reset,
        },
        ui: UiOutput {
            theme: config.ui.theme_mode.name().to_string(),
            show_help_on_startup: config.ui.show_help_on_startup,
        },
        colors: config
            .colors
            .iter()
            .map(|(category, color)| (category.name().to_string(), color.to_hex()))
            .collect(),
    };

    print_json(&output)
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, path: &Path) {
    println!("Configuration ({})", path.display());
    println!();
    println!("Keyboard:");
    println!("  preset:           {}", config.keyboard.preset);
    println!("  mode_toggle:      {}", config.keyboard.mode_toggle);
    println!("  shift_auto_reset: {}", config.keyboard.shift_auto_reset);
    println!();
    println!("UI:");
    println!("  theme:                {}", config.ui.theme_mode.name());
    println!("  show_help_on_startup: {}", config.ui.show_help_on_startup);

    if !config.colors.is_empty() {
        println!();
        println!("Colors:");
        for (category, color) in &config.colors {
            println!("  {:<12} {}", category.name(), color);
        }
    }
}
