//! Smoke tests to verify command module wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn grapevine() -> Command {
    let mut cmd = Command::cargo_bin("grapevine").unwrap();
    // Keep the user's ~/.grapevine out of the picture
    cmd.env("HOME", env!("CARGO_TARGET_TMPDIR"))
        .env_remove("GRAPEVINE_ENDPOINT")
        .env_remove("DATABASE_URL");
    cmd
}

// === Top Level ===

#[test]
fn test_help_lists_commands() {
    grapevine()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("posts"))
        .stdout(predicate::str::contains("ui"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_version() {
    grapevine()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("grapevine"));
}

// === Posts Command Tests ===

#[test]
fn test_posts_list_help() {
    grapevine()
        .args(["posts", "list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Output format"));
}

#[test]
fn test_posts_create_help() {
    grapevine()
        .args(["posts", "create", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Who said it"));
}

#[test]
fn test_posts_update_requires_id() {
    grapevine()
        .args(["posts", "update"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("<ID>"));
}

#[test]
fn test_posts_get_rejects_non_numeric_id() {
    grapevine()
        .args(["posts", "get", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_posts_list_unreachable_server_fails() {
    grapevine()
        .args(["posts", "list", "--endpoint", "http://127.0.0.1:9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to list posts"));
}

// === Serve Command Tests ===

#[test]
fn test_serve_help() {
    grapevine()
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--memory"))
        .stdout(predicate::str::contains("--database-url"));
}

#[test]
fn test_migrate_without_database_url_fails() {
    grapevine()
        .arg("migrate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

// === Config Command Tests ===

#[test]
fn test_config_path() {
    grapevine()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".grapevine"))
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_defaults() {
    grapevine()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://127.0.0.1:3000"))
        .stdout(predicate::str::contains("127.0.0.1:3000"));
}

#[test]
fn test_config_show_env_override() {
    grapevine()
        .args(["config", "show"])
        .env("GRAPEVINE_ENDPOINT", "http://quotes.local:9000")
        .assert()
        .success()
        .stdout(predicate::str::contains("http://quotes.local:9000"));
}

// === Completions ===

#[test]
fn test_completions_bash() {
    grapevine()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("grapevine"));
}
