//! End-to-end tests for `coderkeys category`.

mod fixtures;
use fixtures::*;

#[test]
fn test_category_of_each_kind() {
    let (_dir, config) = temp_config();
    let result = run_json(
        &config,
        &["category", "--json", "a", "7", "+", "{", "\"", "_", ";", "shift"],
    );

    let categories: Vec<&str> = result["keys"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k["category"].as_str().unwrap())
        .collect();
    assert_eq!(
        categories,
        vec![
            "letter",
            "digit",
            "operator",
            "bracket",
            "quote",
            "underscore",
            "punctuation",
            "action"
        ]
    );
    assert_eq!(result["count"], 8);
}

#[test]
fn test_category_unknown_falls_back_to_punctuation() {
    let (_dir, config) = temp_config();
    let result = run_json(&config, &["category", "--json", "hyperdrive"]);

    assert_eq!(result["keys"][0]["id"], "hyperdrive");
    assert_eq!(result["keys"][0]["category"], "punctuation");
}

#[test]
fn test_category_ampersand_and_pipe_are_punctuation() {
    let (_dir, config) = temp_config();
    let result = run_json(&config, &["category", "--json", "&", "|"]);

    assert_eq!(result["keys"][0]["category"], "punctuation");
    assert_eq!(result["keys"][1]["category"], "punctuation");
}

#[test]
fn test_category_human_output() {
    let (_dir, config) = temp_config();
    let output = run(&config, &["category", "x", "9"]);

    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.contains("letter"));
    assert!(out.contains("digit"));
}

#[test]
fn test_category_requires_an_id() {
    let (_dir, config) = temp_config();
    let output = run(&config, &["category"]);
    assert_ne!(output.status.code(), Some(0));
}
