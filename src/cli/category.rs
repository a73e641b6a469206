//! `category` command: prints the color category of key identifiers.

use crate::cli::common::{print_json, CliResult};
use crate::cli::load_config;
use crate::models::{KeyCategory, KeyLayout};
use clap::Args;
use serde::Serialize;
use std::path::Path;

/// Print the color category of key identifiers
#[derive(Debug, Clone, Args)]
pub struct CategoryArgs {
    /// Key identifiers; unknown identifiers fall back to punctuation
    #[arg(value_name = "ID", required = true)]
    pub ids: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct CategoryItem {
    id: String,
    category: KeyCategory,
    color: String,
}

#[derive(Debug, Serialize)]
struct CategoryResponse {
    keys: Vec<CategoryItem>,
    count: usize,
}

impl CategoryArgs {
    /// Execute the category command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let palette = config.palette(config.ui.theme_mode.fixed_appearance().unwrap_or_default());

        let keys: Vec<CategoryItem> = self
            .ids
            .iter()
            .map(|id| {
                let category = KeyLayout::category_of(id);
                CategoryItem {
                    id: id.clone(),
                    category,
                    color: palette.color(category).to_hex(),
                }
            })
            .collect();

        let response = CategoryResponse {
            count: keys.len(),
            keys,
        };

        if self.json {
            return print_json(&response);
        }

        for item in response.keys {
            println!("  {:<12} {:<12} {}", item.id, item.category.name(), item.color);
        }
        Ok(())
    }
}
