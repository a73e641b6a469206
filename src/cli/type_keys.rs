//! `type` command: replays key identifiers through a recording host.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::cli::layout::parse_preset;
use crate::cli::load_config;
use crate::engine::{HostCall, InputState, KeyOutput, Keyboard, KeyboardOptions, RecordingHost};
use crate::models::Key;
use clap::Args;
use serde::Serialize;
use std::path::Path;

/// Replay key presses and print the text a host would receive
#[derive(Debug, Clone, Args)]
pub struct TypeArgs {
    /// Key identifiers: single characters or shift, backspace, space, return, globe, mode
    #[arg(value_name = "KEY", required = true)]
    pub keys: Vec<String>,

    /// Layout preset (sectioned or classic); defaults to the configured one
    #[arg(long, value_name = "PRESET")]
    pub preset: Option<String>,

    /// Split the preset into alphabetic and symbolic pages
    #[arg(long)]
    pub mode_toggle: bool,

    /// Keep shift on after a letter
    #[arg(long)]
    pub no_auto_reset: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct CallItem {
    call: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

impl From<&HostCall> for CallItem {
    fn from(call: &HostCall) -> Self {
        let text = match call {
            HostCall::InsertText(text) => Some(text.clone()),
            _ => None,
        };
        Self {
            call: call.name(),
            text,
        }
    }
}

#[derive(Debug, Serialize)]
struct TypeResponse {
    text: String,
    calls: Vec<CallItem>,
    outputs: Vec<KeyOutput>,
    state: InputState,
}

impl TypeArgs {
    /// Execute the type command
    pub fn execute(&self, config_path: Option<&Path>) -> CliResult<()> {
        let config = load_config(config_path)?;
        let options = KeyboardOptions {
            preset: parse_preset(self.preset.as_deref(), config.keyboard.preset)?,
            mode_toggle: self.mode_toggle || config.keyboard.mode_toggle,
            shift_auto_reset: !self.no_auto_reset && config.keyboard.shift_auto_reset,
        };

        let keys = self
            .keys
            .iter()
            .map(|id| {
                Key::parse(id).ok_or_else(|| CliError::validation(format!("Unknown key '{id}'")))
            })
            .collect::<CliResult<Vec<Key>>>()?;

        let mut keyboard = Keyboard::with_host(options, RecordingHost::new());
        let outputs: Vec<KeyOutput> = keys
            .into_iter()
            .filter_map(|key| keyboard.commit_key(key))
            .collect();

        let host = keyboard
            .host()
            .ok_or_else(|| CliError::io("Text host went away during replay"))?;
        let response = TypeResponse {
            text: host.text(),
            calls: host.calls().iter().map(CallItem::from).collect(),
            outputs,
            state: *keyboard.state(),
        };

        if self.json {
            return print_json(&response);
        }

        println!("{}", response.text);
        println!();
        println!(
            "{} host call{}, shift {}, mode {}",
            response.calls.len(),
            if response.calls.len() == 1 { "" } else { "s" },
            if response.state.shift_active() { "on" } else { "off" },
            response.state.mode()
        );
        Ok(())
    }
}
