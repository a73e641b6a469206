//! CLI command handlers for CoderKeys.
//!
//! This module provides headless, scriptable access to the keyboard engine
//! for automation and testing.

pub mod category;
pub mod common;
pub mod config;
pub mod layout;
pub mod type_keys;

// Re-export types used by main.rs and tests
pub use category::CategoryArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use layout::LayoutArgs;
pub use type_keys::TypeArgs;

use crate::config::Config;
use std::io;
use std::path::Path;

/// Loads the config for a headless command.
///
/// Unlike the terminal keyboard, a broken file is an error here. A file
/// that cannot be read is an I/O error; one that cannot be parsed or fails
/// validation is a validation error.
pub(crate) fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let result = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    result.map_err(|e| {
        let message = format!("Failed to load configuration: {e:#}");
        if e.chain().any(|cause| cause.is::<io::Error>()) {
            CliError::io(message)
        } else {
            CliError::validation(message)
        }
    })
}
