//! `layout` command: prints the rows of a keyboard page.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::cli::load_config;
use crate::models::{KeyCategory, KeyLayout, LayoutPreset, Mode};
use clap::Args;
use serde::Serialize;
use std::path::Path;

/// Print the rows of a keyboard page with their color categories
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Page to print (alphabetic or symbolic)
    #[arg(long, value_name = "MODE", default_value = "alphabetic")]
    pub mode: String,

    /// Layout preset (sectioned or classic); defaults to the configured one
    #[arg(long, value_name = "PRESET")]
    pub preset: Option<String>,

    /// Split the preset into alphabetic and symbolic pages
    #[arg(long)]
    pub mode_toggle: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct KeyItem {
    id: String,
    label: String,
    category: KeyCategory,
    color: String,
}

#[derive(Debug, Serialize)]
struct LegendItem {
    category: KeyCategory,
    color: String,
    count: usize,
}

#[derive(Debug, Serialize)]
struct LayoutResponse {
    preset: LayoutPreset,
    mode: Mode,
    mode_toggle: bool,
    rows: Vec<Vec<KeyItem>>,
    legend: Vec<LegendItem>,
    key_count: usize,
}

/// Parses a preset argument into a validation error on failure.
pub(crate) fn parse_preset(value: Option<&str>, fallback: LayoutPreset) -> CliResult<LayoutPreset> {
    value.map_or(Ok(fallback), |v| {
        v.parse().map_err(|e| CliError::validation(format!("{e}")))
    })
}

impl LayoutArgs {
    /// Execute the layout command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let mode: Mode = self
            .mode
            .parse()
            .map_err(|e| CliError::validation(format!("{e}")))?;
        let preset = parse_preset(self.preset.as_deref(), config.keyboard.preset)?;
        let mode_toggle = self.mode_toggle || config.keyboard.mode_toggle;

        let layout = KeyLayout::new(preset, mode_toggle);
        let appearance = config.ui.theme_mode.fixed_appearance().unwrap_or_default();
        let palette = config.palette(appearance);

        let rows: Vec<Vec<KeyItem>> = layout
            .rows_for(mode)
            .iter()
            .map(|row| {
                row.iter()
                    .map(|key| KeyItem {
                        id: key.id(),
                        label: key.label(false),
                        category: key.category(),
                        color: palette.color(key.category()).to_hex(),
                    })
                    .collect()
            })
            .collect();

        let legend: Vec<LegendItem> = KeyCategory::ALL
            .iter()
            .map(|category| LegendItem {
                category: *category,
                color: palette.color(*category).to_hex(),
                count: layout
                    .keys(mode)
                    .filter(|k| k.category() == *category)
                    .count(),
            })
            .filter(|item| item.count > 0)
            .collect();

        let response = LayoutResponse {
            preset,
            mode,
            mode_toggle,
            key_count: rows.iter().map(Vec::len).sum(),
            rows,
            legend,
        };

        if self.json {
            return print_json(&response);
        }

        println!(
            "Layout: {} ({} page{})",
            response.preset,
            response.mode,
            if response.mode_toggle { "" } else { ", single page" }
        );
        println!();
        for row in &response.rows {
            let labels: Vec<&str> = row.iter().map(|k| k.label.as_str()).collect();
            println!("  {}", labels.join(" "));
        }
        println!();
        println!("Legend:");
        for item in &response.legend {
            println!("  {:<12} {}  ({} keys)", item.category.name(), item.color, item.count);
        }

        Ok(())
    }
}
