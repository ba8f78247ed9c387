//! Configuration integration tests.
//!
//! Discovery and merge order are unit-tested in `text-parser-core`; these
//! tests check that analysis settings reach the compiled binary, both in
//! `info --json` and in the analysis report itself.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run with `-C dir` plus `args` and parse the JSON output.
fn run_json(dir: &Path, args: &[&str]) -> Value {
    let output = cmd()
        .arg("-C")
        .arg(dir)
        .args(args)
        .arg("--json")
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

/// A project directory with an embedding table and a `.text-parser.toml`
/// that points at it, followed by `extra` settings.
fn project_with_table(extra: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("vectors.txt"),
        "4 2\ndog 1.0 0.0\npuppy 0.8 0.6\ncat 0.6 0.8\ncar 0.0 1.0\n",
    )
    .unwrap();
    fs::write(
        tmp.path().join(".text-parser.toml"),
        format!("embeddings_path = \"vectors.txt\"\n{extra}"),
    )
    .unwrap();
    tmp
}

fn neighbor_words(report: &Value) -> Vec<String> {
    report["alternatives"][0]["neighbors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|n| n["word"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Reported Settings
// =============================================================================

#[test]
fn analysis_defaults_are_reported() {
    let tmp = TempDir::new().unwrap();
    let json = run_json(tmp.path(), &["info"]);

    assert!(json["config"]["config_file"].is_null());
    assert_eq!(json["config"]["neighbor_count"], 10);
    assert_eq!(json["config"]["join_names"], true);
    assert_eq!(json["config"]["max_input_bytes"], 5 * 1024 * 1024);
}

#[test]
fn project_table_is_reported_available() {
    let tmp = project_with_table("neighbor_count = 3\njoin_names = false\n");
    let json = run_json(tmp.path(), &["info"]);

    assert_eq!(json["config"]["neighbor_count"], 3);
    assert_eq!(json["config"]["join_names"], false);
    assert_eq!(json["config"]["embeddings_available"], true);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(reported.ends_with(".text-parser.toml"), "{reported}");
}

#[test]
fn missing_table_is_reported_unavailable() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("text-parser.yaml"),
        "embeddings_path: /nonexistent/vectors.txt\n",
    )
    .unwrap();

    let json = run_json(tmp.path(), &["info"]);
    assert_eq!(json["config"]["embeddings_available"], false);
    assert_eq!(json["config"]["embeddings_path"], "/nonexistent/vectors.txt");
}

#[test]
fn disabled_input_limit_is_omitted() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".text-parser.toml"),
        "disable_input_limit = true\n",
    )
    .unwrap();

    let json = run_json(tmp.path(), &["info"]);
    assert!(json["config"]["max_input_bytes"].is_null());
}

// =============================================================================
// Settings Applied To Analysis
// =============================================================================

#[test]
fn relative_embeddings_path_is_read_from_working_dir() {
    let tmp = project_with_table("");
    let report = run_json(tmp.path(), &["dogs"]);

    assert_eq!(report["alternatives"][0]["lemma"], "dog");
    assert_eq!(neighbor_words(&report), vec!["puppy", "cat", "car"]);
}

#[test]
fn configured_neighbor_count_limits_neighbors() {
    let tmp = project_with_table("neighbor_count = 1\n");
    let report = run_json(tmp.path(), &["dog"]);
    assert_eq!(neighbor_words(&report), vec!["puppy"]);
}

#[test]
fn env_neighbor_count_overrides_file() {
    let tmp = project_with_table("neighbor_count = 1\n");
    let output = cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["--json", "dog"])
        .env("TEXT_PARSER_NEIGHBOR_COUNT", "2")
        .output()
        .unwrap();
    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(neighbor_words(&report), vec!["puppy", "cat"]);
}

#[test]
fn neighbors_flag_overrides_config() {
    let tmp = project_with_table("neighbor_count = 1\n");
    let report = run_json(tmp.path(), &["--neighbors", "3", "dog"]);
    assert_eq!(neighbor_words(&report).len(), 3);
}

#[test]
fn join_names_false_splits_entities() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".text-parser.toml"),
        "join_names = false\nembeddings_path = \"/nonexistent/vectors.txt\"\n",
    )
    .unwrap();

    cmd()
        .arg("-C")
        .arg(tmp.path())
        .args(["They", "flew", "to", "New", "York"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Place: New York").not());
}

#[test]
fn explicit_config_overrides_project_table() {
    let tmp = project_with_table("");
    let explicit = tmp.path().join("override.json");
    fs::write(&explicit, r#"{"neighbor_count": 2}"#).unwrap();

    let report = run_json(
        tmp.path(),
        &["--config", explicit.to_str().unwrap(), "dog"],
    );
    assert_eq!(neighbor_words(&report), vec!["puppy", "cat"]);
}

#[test]
fn git_boundary_hides_parent_table() {
    let tmp = project_with_table("neighbor_count = 1\n");
    let src = tmp.path().join("repo").join("src");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir(tmp.path().join("repo").join(".git")).unwrap();

    let json = run_json(&src, &["info"]);
    assert!(json["config"]["config_file"].is_null());
    assert_eq!(json["config"]["neighbor_count"], 10);
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn invalid_setting_fails_analysis() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".text-parser.toml"),
        "neighbor_count = \"many\"\n",
    )
    .unwrap();

    cmd()
        .arg("-C")
        .arg(tmp.path())
        .arg("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("configuration"));
}

#[test]
fn unknown_config_field_is_ignored() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join(".text-parser.toml"),
        "neighbor_count = 4\nunknown_field = \"ignored\"\n",
    )
    .unwrap();

    let json = run_json(tmp.path(), &["info"]);
    assert_eq!(json["config"]["neighbor_count"], 4);
}
