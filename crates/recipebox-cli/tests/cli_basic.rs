//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with its config root pointed at a
//! temporary directory and verify outputs.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (exit code, stdout, stderr).
fn run_cli(home: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_recipebox-cli"))
        .args(args)
        .env("RECIPEBOX_CONFIG_HOME", home)
        .env_remove("RECIPEBOX_ENV")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn json_ids(stdout: &str) -> Vec<String> {
    let parsed: serde_json::Value = serde_json::from_str(stdout).expect("invalid JSON output");
    parsed
        .as_array()
        .expect("expected JSON array")
        .iter()
        .map(|r| r["id"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_recipes_list() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["recipes", "list"]);
    assert_eq!(code, 0, "recipes list failed");
    assert!(stdout.contains("Grilled Salmon with Lemon"));
    assert!(stdout.contains("Seafood • 25 min • 420 cal"));
}

#[test]
fn test_recipes_list_json() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["recipes", "list", "--json"]);
    assert_eq!(code, 0);
    assert_eq!(json_ids(&stdout), vec!["r1", "r2", "r3", "r4", "r5"]);
}

#[test]
fn test_recipes_search() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["recipes", "search", "LEMON", "--json"]);
    assert_eq!(code, 0);
    assert_eq!(json_ids(&stdout), vec!["r1", "r3", "r4"]);
}

#[test]
fn test_recipes_search_blank_lists_all() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["recipes", "search", "   ", "--json"]);
    assert_eq!(code, 0);
    assert_eq!(json_ids(&stdout).len(), 5);
}

#[test]
fn test_recipes_search_no_match() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["recipes", "search", "durian"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("No recipes match 'durian'."));
}

#[test]
fn test_recipes_show() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["recipes", "show", "r5"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Beef Stir Fry"));
    assert!(stdout.contains("  - Soy sauce"));
    assert!(stdout.contains("☆ Favorite"));
}

#[test]
fn test_recipes_show_unknown_fails() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["recipes", "show", "r99"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error: recipe 'r99' not found"));
}

#[test]
fn test_favorites_toggle_roundtrip() {
    let home = tempfile::tempdir().unwrap();

    let (code, stdout, _) = run_cli(home.path(), &["favorites", "toggle", "r2"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.lines().next(), Some("r2: favorited"));
    assert!(stdout.contains("★ [r2] Chicken Alfredo Pasta"));

    let (_, stdout, _) = run_cli(home.path(), &["favorites", "check", "r2"]);
    assert_eq!(stdout.trim(), "true");

    let (_, stdout, _) = run_cli(home.path(), &["favorites", "list", "--json"]);
    assert_eq!(json_ids(&stdout), vec!["r2"]);

    let settings = home.path().join("RecipeExplorer").join("RecipeApp.toml");
    let content = std::fs::read_to_string(settings).unwrap();
    assert!(content.contains("r2"));

    let (_, stdout, _) = run_cli(home.path(), &["favorites", "toggle", "r2"]);
    assert_eq!(stdout.lines().next(), Some("r2: not favorited"));
    assert!(stdout.contains("☆ [r2] Chicken Alfredo Pasta"));

    let (_, stdout, _) = run_cli(home.path(), &["favorites", "list", "--json"]);
    assert!(json_ids(&stdout).is_empty());
}

#[test]
fn test_favorites_stale() {
    let home = tempfile::tempdir().unwrap();
    run_cli(home.path(), &["favorites", "toggle", "gone"]);
    run_cli(home.path(), &["favorites", "toggle", "r1"]);

    let (code, stdout, _) = run_cli(home.path(), &["favorites", "stale"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "gone");

    let (_, stdout, _) = run_cli(home.path(), &["favorites", "list"]);
    assert!(stdout.contains("Grilled Salmon with Lemon"));
    assert!(!stdout.contains("gone"));
}

#[test]
fn test_config_get_set() {
    let home = tempfile::tempdir().unwrap();

    let (code, stdout, _) = run_cli(home.path(), &["config", "get", "settings.application"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "RecipeApp");

    let (code, _, _) = run_cli(home.path(), &["config", "set", "settings.application", "Other"]);
    assert_eq!(code, 0);

    run_cli(home.path(), &["favorites", "toggle", "r4"]);
    assert!(home.path().join("RecipeExplorer").join("Other.toml").exists());
}

#[test]
fn test_config_unknown_key_fails() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["config", "get", "nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key: nope"));
}

#[test]
fn test_config_catalog_path() {
    let home = tempfile::tempdir().unwrap();
    let fixture = home.path().join("catalog.toml");
    std::fs::write(
        &fixture,
        "[[recipes]]\nid = \"pb\"\ntitle = \"Peanut Butter Toast\"\ncategory = \"Snack\"\ningredients = [\"Bread\", \"Peanut butter\"]\n",
    )
    .unwrap();

    let fixture_str = fixture.to_str().unwrap();
    let (code, _, _) = run_cli(home.path(), &["config", "set", "catalog.path", fixture_str]);
    assert_eq!(code, 0);

    let (_, stdout, _) = run_cli(home.path(), &["recipes", "search", "bread", "--json"]);
    assert_eq!(json_ids(&stdout), vec!["pb"]);
}

#[test]
fn test_config_reset_recovers_broken_file() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("recipebox");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[settings\n").unwrap();

    let (code, _, _) = run_cli(home.path(), &["recipes", "list"]);
    assert_eq!(code, 1);

    let (code, stdout, _) = run_cli(home.path(), &["config", "reset"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("config reset to defaults"));

    let (code, _, _) = run_cli(home.path(), &["recipes", "list"]);
    assert_eq!(code, 0);
}

#[test]
fn test_favorites_toggle_unknown_id_prints_state_only() {
    let home = tempfile::tempdir().unwrap();
    let (code, stdout, _) = run_cli(home.path(), &["favorites", "toggle", "gone"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "gone: favorited");
}

#[test]
fn test_config_set_rejects_bad_log_level() {
    let home = tempfile::tempdir().unwrap();
    let (code, _, stderr) = run_cli(home.path(), &["config", "set", "logging.level", "garbage"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("logging.level"));

    let (_, stdout, _) = run_cli(home.path(), &["config", "get", "logging.level"]);
    assert_eq!(stdout.trim(), "warn");
}

#[test]
fn test_hand_edited_bad_log_level_warns() {
    let home = tempfile::tempdir().unwrap();
    let dir = home.path().join("recipebox");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[logging]\nlevel = \"verbose\"\n").unwrap();

    let (code, _, stderr) = run_cli(home.path(), &["recipes", "list"]);
    assert_eq!(code, 0);
    assert!(stderr.contains("ignoring logging.level"));
}
