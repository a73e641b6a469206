//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and file locations.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "CoderKeys";

/// The binary name of the application (used in command examples, lowercase).
pub const APP_BINARY_NAME: &str = "coderkeys";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "CoderKeys";

/// Log file written by the terminal keyboard, next to the config file.
pub const LOG_FILE_NAME: &str = "coderkeys.log";
