//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::constants::CONFIG_DIR_NAME;
use crate::engine::KeyboardOptions;
use crate::models::{Appearance, KeyCategory, KeyPalette, LayoutPreset, RgbColor};

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

impl ThemeMode {
    /// Appearance forced by this mode, `None` for `Auto`.
    #[must_use]
    pub const fn fixed_appearance(self) -> Option<Appearance> {
        match self {
            Self::Auto => None,
            Self::Dark => Some(Appearance::Dark),
            Self::Light => Some(Appearance::Light),
        }
    }

    /// Lowercase name used in CLI output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => anyhow::bail!("Unknown theme mode '{other}' (expected auto, dark or light)"),
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display the key binding help line on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: true,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/CoderKeys/config.toml`
/// - macOS: `~/Library/Application Support/CoderKeys/config.toml`
/// - Windows: `%APPDATA%\CoderKeys\config.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Keyboard behavior
    #[serde(default)]
    pub keyboard: KeyboardOptions,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Per-category key color overrides
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub colors: BTreeMap<KeyCategory, RgbColor>,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the default config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Loads configuration, falling back to defaults when the file is broken.
    #[must_use]
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let result = match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        };
        result.unwrap_or_else(|e| {
            warn!("Failed to load config, using defaults: {e:#}");
            Self::new()
        })
    }

    /// Saves configuration to the default config file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to a file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .context(format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content)
            .context(format!("Failed to write temp config file: {}", temp_path.display()))?;

        fs::rename(&temp_path, path)
            .context(format!("Failed to rename temp config file to: {}", path.display()))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Category names and colors are already checked by deserialization;
    /// the remaining rule is that letters and action keys stay
    /// distinguishable from each other on both appearances.
    pub fn validate(&self) -> Result<()> {
        for appearance in [Appearance::Dark, Appearance::Light] {
            let palette = self.palette(appearance);
            if palette.letter == palette.special
                && (self.colors.contains_key(&KeyCategory::Letter)
                    || self.colors.contains_key(&KeyCategory::Action))
            {
                anyhow::bail!(
                    "Letter and action keys must not share a color ({})",
                    palette.letter
                );
            }
        }
        Ok(())
    }

    /// Key palette for an appearance with user overrides applied.
    #[must_use]
    pub fn palette(&self, appearance: Appearance) -> KeyPalette {
        KeyPalette::for_appearance(appearance).with_overrides(&self.colors)
    }

    /// Sets a single value addressed by a dotted key (e.g. `keyboard.preset`).
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "keyboard.preset" => self.keyboard.preset = value.parse::<LayoutPreset>()?,
            "keyboard.mode_toggle" => self.keyboard.mode_toggle = parse_bool(value)?,
            "keyboard.shift_auto_reset" => self.keyboard.shift_auto_reset = parse_bool(value)?,
            "ui.theme_mode" => self.ui.theme_mode = value.parse::<ThemeMode>()?,
            "ui.show_help_on_startup" => self.ui.show_help_on_startup = parse_bool(value)?,
            other => {
                let Some(name) = other.strip_prefix("colors.") else {
                    anyhow::bail!("Unknown config key '{other}'");
                };
                let category = KeyCategory::from_name(name)
                    .ok_or_else(|| anyhow::anyhow!("Unknown key category '{name}'"))?;
                if value.trim().eq_ignore_ascii_case("default") {
                    self.colors.remove(&category);
                } else {
                    self.colors.insert(category, RgbColor::from_hex(value)?);
                }
            }
        }
        self.validate()
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        other => anyhow::bail!("Expected a boolean, got '{other}'"),
    }
}
