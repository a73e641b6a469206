//! End-to-end tests for `coderkeys config` commands.

use std::fs;

mod fixtures;
use fixtures::*;

// ============================================================================
// Show / Path
// ============================================================================

#[test]
fn test_config_show_defaults_without_file() {
    let (_dir, config) = temp_config();
    let result = run_json(&config, &["config", "show", "--json"]);

    assert_eq!(result["keyboard"]["preset"], "sectioned");
    assert_eq!(result["keyboard"]["mode_toggle"], false);
    assert_eq!(result["keyboard"]["shift_auto_reset"], true);
    assert_eq!(result["ui"]["theme"], "auto");
    assert_eq!(result["ui"]["show_help_on_startup"], true);
    assert!(result["colors"].as_object().unwrap().is_empty());
    assert!(!config.exists(), "show never creates the file");
}

#[test]
fn test_config_show_human_readable() {
    let (_dir, config) = temp_config();
    let output = run(&config, &["config", "show"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("preset:"));
    assert!(out.contains("theme:"));
}

#[test]
fn test_config_path_uses_override() {
    let (_dir, config) = temp_config();
    let output = run(&config, &["config", "path"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output).trim(), config.display().to_string());
}

// ============================================================================
// Set
// ============================================================================

#[test]
fn test_config_set_and_show() {
    let (_dir, config) = temp_config();

    for (key, value) in [
        ("keyboard.preset", "classic"),
        ("keyboard.mode_toggle", "true"),
        ("ui.theme_mode", "light"),
        ("colors.digit", "#123456"),
    ] {
        let output = run(&config, &["config", "set", key, value]);
        assert_eq!(
            output.status.code(),
            Some(0),
            "set {key} failed: {}",
            stderr(&output)
        );
    }

    let result = run_json(&config, &["config", "show", "--json"]);
    assert_eq!(result["keyboard"]["preset"], "classic");
    assert_eq!(result["keyboard"]["mode_toggle"], true);
    assert_eq!(result["ui"]["theme"], "light");
    assert_eq!(result["colors"]["digit"], "#123456");

    let toml = fs::read_to_string(&config).unwrap();
    assert!(toml.contains("preset = \"classic\""));
    assert!(toml.contains("theme_mode = \"Light\""));
}

#[test]
fn test_config_set_affects_other_commands() {
    let (_dir, config) = temp_config();
    run(&config, &["config", "set", "keyboard.shift_auto_reset", "false"]);

    let result = run_json(&config, &["type", "--json", "shift", "a", "b"]);
    assert_eq!(result["text"], "AB");
}

#[test]
fn test_config_set_color_default_removes_override() {
    let (_dir, config) = temp_config_with("[colors]\nquote = \"#ABCDEF\"\n");
    let output = run(&config, &["config", "set", "colors.quote", "default"]);
    assert_eq!(output.status.code(), Some(0));

    let result = run_json(&config, &["config", "show", "--json"]);
    assert!(result["colors"].as_object().unwrap().is_empty());
}

#[test]
fn test_config_set_unknown_key() {
    let (_dir, config) = temp_config();
    let output = run(&config, &["config", "set", "keyboard.layout", "qwerty"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown config key"));
    assert!(!config.exists());
}

#[test]
fn test_config_set_invalid_values() {
    let (_dir, config) = temp_config();
    for (key, value) in [
        ("keyboard.preset", "dvorak"),
        ("keyboard.mode_toggle", "maybe"),
        ("ui.theme_mode", "sepia"),
        ("colors.digit", "orange"),
        ("colors.symbol", "#000000"),
    ] {
        let output = run(&config, &["config", "set", key, value]);
        assert_eq!(output.status.code(), Some(1), "{key} = {value}");
    }
}

#[test]
fn test_config_unknown_category_in_file_rejected() {
    let (_dir, config) = temp_config_with("[colors]\nsymbol = \"#FF9500\"\n");
    let output = run(&config, &["config", "show"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_io_error() {
    let (dir, _config) = temp_config();
    // A directory where the config file should be
    let blocked = dir.path().join("blocked");
    fs::create_dir_all(blocked.join("config.toml.tmp")).unwrap();
    let target = blocked.join("config.toml");

    let output = run(&target, &["config", "set", "keyboard.preset", "classic"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to save configuration"));
}

#[test]
fn test_config_unreadable_file_is_io_error() {
    let (_dir, config) = temp_config();
    // A directory exists but cannot be read as a file
    fs::create_dir_all(&config).unwrap();

    let output = run(&config, &["config", "show"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Failed to read config file"));

    let output = run(&config, &["layout"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_config_unparseable_file_is_validation_error() {
    let (_dir, config) = temp_config_with("this is [ not toml");
    let output = run(&config, &["config", "show"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to parse config file"));
}

#[test]
fn test_config_set_letter_matching_action_color_rejected() {
    let (_dir, config) = temp_config();
    // Built-in dark color of action keys
    let output = run(&config, &["config", "set", "colors.letter", "#2C2C2E"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("must not share a color"));
    assert!(!config.exists());
}
