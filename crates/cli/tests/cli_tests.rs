use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn box_tracker(db_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("box-tracker").unwrap();
    cmd.env_remove("DATABASE_URL").env("BOX_TRACKER_DB_PATH", db_dir.path().join("boxes.db"));
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("box-tracker").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory tracker for household moving boxes"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("box-tracker").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_cli_list_empty_database() {
    let dir = TempDir::new().unwrap();
    box_tracker(&dir).arg("list").assert().success().stdout(predicate::str::contains("[]"));
}

#[test]
fn test_cli_add_then_list() {
    let dir = TempDir::new().unwrap();
    box_tracker(&dir)
        .args(["add", "5", "Kitchen", "dishes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"number\": 5"));

    box_tracker(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kitchen").and(predicate::str::contains("dishes")));
}

#[test]
fn test_cli_add_rejects_blank_contents() {
    let dir = TempDir::new().unwrap();
    box_tracker(&dir)
        .args(["add", "1", "Office", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("contents is required"));
}

#[test]
fn test_cli_migrate_is_idempotent() {
    let dir = TempDir::new().unwrap();
    box_tracker(&dir)
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("sqlite: applied"));
    box_tracker(&dir)
        .arg("migrate")
        .assert()
        .success()
        .stdout(predicate::str::contains("schema up to date"));
}

#[test]
fn test_cli_show_by_id() {
    let dir = TempDir::new().unwrap();
    box_tracker(&dir).args(["add", "9", "Garage", "bikes"]).assert().success();

    box_tracker(&dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"number\": 9").and(predicate::str::contains("bikes")));

    box_tracker(&dir)
        .args(["show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("box 42 not found"));
}
