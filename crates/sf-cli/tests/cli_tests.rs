//! Integration tests for the `sf` binary against the fixture project

use std::path::PathBuf;
use std::process::Command;

fn sf_bin() -> String {
    env!("CARGO_BIN_EXE_sf").to_string()
}

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/shop_project")
}

/// Run `sf` against the fixture project, returning (stdout, stderr, success)
fn run_sf(args: &[&str]) -> (String, String, bool) {
    let project = fixture_dir();
    let output = Command::new(sf_bin())
        .args(args)
        .arg("--project-dir")
        .arg(&project)
        .env("RUST_LOG", "warn")
        .output()
        .expect("Failed to run sf");
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

#[test]
fn test_ls_lists_snippets_in_file_order() {
    let (stdout, stderr, success) = run_sf(&["ls", "--output", "json"]);
    assert!(success, "ls failed: {stderr}");

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let names: Vec<&str> = parsed
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["orders_less", "another_orders", "final", "bad_final"]);

    let final_entry = &parsed[2];
    assert_eq!(final_entry["depends_on"], serde_json::json!(["another_orders"]));
    assert_eq!(final_entry["external_deps"], serde_json::json!(["customers"]));
    assert_eq!(parsed[0]["external_deps"], serde_json::json!(["orders"]));
    assert_eq!(parsed[3]["external_deps"], serde_json::json!([]));
    assert_eq!(parsed[3]["unverified"], serde_json::json!(true));
}

#[test]
fn test_ls_table_output() {
    let (stdout, _, success) = run_sf(&["ls"]);
    assert!(success);
    assert!(stdout.contains("NAME"));
    assert!(stdout.contains("not executed"));
    assert!(stdout.contains("another_orders, customers (external)"));
    assert!(stdout.contains("4 snippets"));
}

#[test]
fn test_show_renders_cte() {
    let (stdout, stderr, success) = run_sf(&["show", "final"]);
    assert!(success, "show failed: {stderr}");
    assert!(stdout.starts_with(
        "WITH \"another_orders\" AS (\n\nSELECT * FROM orders WHERE order_value > 250.0)\n"
    ));
    assert!(stdout.contains("ORDER BY o.order_id"));
    assert!(!stdout.contains("-- orders above"));
}

#[test]
fn test_show_unknown_snippet_fails() {
    let (_, stderr, success) = run_sf(&["show", "missing"]);
    assert!(!success);
    assert!(stderr.contains("missing"));
}

#[test]
fn test_compile_infers_snippets() {
    let (stdout, _, success) = run_sf(&["compile", "SELECT count(*) FROM orders_less;"]);
    assert!(success);
    assert_eq!(
        stdout.trim_end(),
        "WITH \"orders_less\" AS (\nSELECT * FROM orders WHERE order_value < 250.0)\nSELECT count(*) FROM orders_less;"
    );
}

#[test]
fn test_compile_check_reports_syntax_error() {
    let (stdout, stderr, success) = run_sf(&["compile", "SELECT * FRM orders_less", "--check"]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("There is a syntax error in the query."));
    assert!(stderr.contains("Original error message from DB driver:"));
}

#[test]
fn test_run_snippet_returns_rows() {
    let (stdout, stderr, success) = run_sf(&["run", "final"]);
    assert!(success, "run failed: {stderr}");
    assert!(stdout.contains("order_id"));
    assert!(stdout.contains("Grace"));
    assert!(stdout.contains("Ada"));
    assert!(stdout.contains("2 rows"));
}

#[test]
fn test_run_table_typo_suggests_snippet() {
    let (_, stderr, success) = run_sf(&["run", "--sql", "SELECT * FROM orders_lesss"]);
    assert!(!success);
    assert!(stderr.contains("There is no table with name 'orders_lesss'."));
    assert!(stderr.contains("Did you mean: "));
    assert!(stderr.contains("'orders_less'"));
}

#[test]
fn test_run_unexecuted_snippet_lists_it() {
    let (_, stderr, success) = run_sf(&["run", "bad_final"]);
    assert!(!success);
    assert!(stderr.contains("There is a syntax error in the query."));
    assert!(stderr.contains("If using snippets, you may pass the --with argument explicitly."));
    assert!(stderr.contains("Snippets saved without execution: 'bad_final'"));
}

#[test]
fn test_deps_shows_both_directions() {
    let (stdout, _, success) = run_sf(&["deps", "another_orders"]);
    assert!(success);
    assert!(stdout.contains("requires:    (none)"));
    assert!(stdout.contains("used by:     'final' and 'bad_final'"));
}

#[test]
fn test_delete_strict_refuses_with_dependents() {
    let (_, stderr, success) = run_sf(&["delete", "another_orders"]);
    assert!(!success);
    assert!(stderr.contains("final"));
}

#[test]
fn test_delete_force_all_cascades() {
    let (stdout, stderr, success) = run_sf(&["delete", "another_orders", "--force-all"]);
    assert!(success, "delete failed: {stderr}");
    assert!(stdout.starts_with("another_orders, "));
    assert!(stdout.contains("has been deleted."));
    assert!(stdout.contains("Stored snippets: 'orders_less'"));
}

#[test]
fn test_missing_project_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = Command::new(sf_bin())
        .args(["ls", "-p"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load project"));
}
