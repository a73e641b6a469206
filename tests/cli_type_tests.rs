//! End-to-end tests for `coderkeys type`.

mod fixtures;
use fixtures::*;

// ============================================================================
// Shift and casing
// ============================================================================

#[test]
fn test_type_shift_capitalizes_one_letter() {
    let (_dir, config) = temp_config();
    let result = run_json(&config, &["type", "--json", "a", "shift", "b", "c"]);

    assert_eq!(result["text"], "aBc");
    assert_eq!(result["state"]["shift_active"], false);
    assert_eq!(result["calls"].as_array().unwrap().len(), 3);
}

#[test]
fn test_type_no_auto_reset_keeps_shift() {
    let (_dir, config) = temp_config();
    let result = run_json(
        &config,
        &["type", "--json", "--no-auto-reset", "shift", "a", "b"],
    );

    assert_eq!(result["text"], "AB");
    assert_eq!(result["state"]["shift_active"], true);
}

#[test]
fn test_type_uppercase_identifier_uses_shift_state() {
    let (_dir, config) = temp_config();
    let result = run_json(&config, &["type", "--json", "Q"]);
    assert_eq!(result["text"], "q");
}

#[test]
fn test_type_symbols_ignore_shift() {
    let (_dir, config) = temp_config();
    let result = run_json(&config, &["type", "--json", "shift", "(", "1", "_", "a"]);

    // Shift survives the symbols and capitalizes the letter
    assert_eq!(result["text"], "(1_A");
}

// ============================================================================
// Host calls
// ============================================================================

#[test]
fn test_type_host_calls() {
    let (_dir, config) = temp_config();
    let result = run_json(
        &config,
        &["type", "--json", "x", "space", "return", "backspace", "globe"],
    );

    let calls: Vec<&str> = result["calls"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["call"].as_str().unwrap())
        .collect();
    assert_eq!(
        calls,
        vec![
            "insert_text",
            "insert_text",
            "insert_newline",
            "delete_backward",
            "advance_to_next_input_source"
        ]
    );
    assert_eq!(result["calls"][1]["text"], " ");
    assert_eq!(result["text"], "x ");
}

#[test]
fn test_type_state_keys_make_no_calls() {
    let (_dir, config) = temp_config();
    let result = run_json(&config, &["type", "--json", "shift", "shift", "mode"]);

    assert!(result["calls"].as_array().unwrap().is_empty());
    let outputs = result["outputs"].as_array().unwrap();
    assert_eq!(outputs[0]["kind"], "shift");
    assert_eq!(outputs[0]["value"], true);
    assert_eq!(outputs[1]["value"], false);
    // Without the mode toggle the page stays alphabetic
    assert_eq!(outputs[2]["kind"], "mode");
    assert_eq!(outputs[2]["value"], "alphabetic");
}

#[test]
fn test_type_mode_toggle() {
    let (_dir, config) = temp_config();
    let result = run_json(
        &config,
        &["type", "--json", "--mode-toggle", "5", "mode", "5"],
    );

    assert_eq!(result["text"], "55");
    assert_eq!(result["state"]["mode"], "symbolic");
}

#[test]
fn test_type_mode_toggle_from_config() {
    let (_dir, config) = temp_config_with("[keyboard]\nmode_toggle = true\n");
    let result = run_json(&config, &["type", "--json", "mode"]);
    assert_eq!(result["state"]["mode"], "symbolic");
}

// ============================================================================
// Output and errors
// ============================================================================

#[test]
fn test_type_human_output() {
    let (_dir, config) = temp_config();
    let output = run(&config, &["type", "h", "i"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.starts_with("hi\n"), "got: {out}");
    assert!(out.contains("2 host calls, shift off, mode alphabetic"));
}

#[test]
fn test_type_unknown_key_is_validation_error() {
    let (_dir, config) = temp_config();
    let output = run(&config, &["type", "a", "hyperdrive"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unknown key 'hyperdrive'"));
    assert!(stdout(&output).is_empty(), "nothing is typed on error");
}

#[test]
fn test_type_unknown_preset_is_validation_error() {
    let (_dir, config) = temp_config();
    let output = run(&config, &["type", "--preset", "dvorak", "a"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_type_broken_config_is_validation_error() {
    let (_dir, config) = temp_config_with("[keyboard\n");
    let output = run(&config, &["type", "a"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to load configuration"));
}
