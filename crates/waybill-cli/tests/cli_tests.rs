use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn wb_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wb").expect("Failed to find wb binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_add_party() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wb_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "party",
            "add",
            "Sharma Traders",
            "--contact",
            "98200 00000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Registered party with ID: 1"))
        .stdout(predicate::str::contains("Sharma Traders"));
}

#[test]
fn test_cli_list_empty_parties() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wb_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "party", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No parties found."));
}

#[test]
fn test_cli_add_and_show_item() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wb_cmd()
        .args(["--database-file", db_arg, "party", "add", "Mehta & Sons"])
        .assert()
        .success();

    wb_cmd()
        .args([
            "--database-file",
            db_arg,
            "item",
            "add",
            "1",
            "Gasket",
            "--qty",
            "10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created item with ID: 1"))
        .stdout(predicate::str::contains("Gasket"));

    wb_cmd()
        .args(["--database-file", db_arg, "item", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Gasket"))
        .stdout(predicate::str::contains("1. Destination (➤ Pending)"))
        .stdout(predicate::str::contains("- Quantity: 10"));
}

#[test]
fn test_cli_add_item_unknown_party_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wb_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "item",
            "add",
            "42",
            "Gasket",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Party with ID 42 not found"));
}

#[test]
fn test_cli_show_missing_item() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wb_cmd()
        .args(["--database-file", db_path.to_str().unwrap(), "item", "show", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Item 7 not found"));
}

#[test]
fn test_cli_submit_step_advances_item() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wb_cmd()
        .args(["--database-file", db_arg, "party", "add", "Party"])
        .assert()
        .success();
    wb_cmd()
        .args(["--database-file", db_arg, "item", "add", "1", "Gasket"])
        .assert()
        .success();

    wb_cmd()
        .args([
            "--database-file",
            db_arg,
            "step",
            "submit",
            "--item",
            "1",
            "--step",
            "1",
            "--set",
            "Destination=Out Station",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed step 1"))
        .stdout(predicate::str::contains("2. Stock Availability (➤ Pending)"));
}

#[test]
fn test_cli_submit_wrong_step_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wb_cmd()
        .args(["--database-file", db_arg, "party", "add", "Party"])
        .assert()
        .success();
    wb_cmd()
        .args(["--database-file", db_arg, "item", "add", "1", "Gasket"])
        .assert()
        .success();

    wb_cmd()
        .args([
            "--database-file",
            db_arg,
            "step",
            "submit",
            "--item",
            "1",
            "--step",
            "4",
            "--set",
            "Packing Details=2 crates",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid submission"));
}

#[test]
fn test_cli_submit_requires_single_target() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wb_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "step",
            "submit",
            "--step",
            "1",
            "--set",
            "Destination=Local",
            "--item",
            "1",
            "--party",
            "1",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_bulk_submit_reports_failures() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wb_cmd()
        .args(["--database-file", db_arg, "party", "add", "Party"])
        .assert()
        .success();
    wb_cmd()
        .args(["--database-file", db_arg, "item", "add", "1", "Gasket"])
        .assert()
        .success();

    wb_cmd()
        .args([
            "--database-file",
            db_arg,
            "step",
            "submit",
            "--items",
            "1,99",
            "--step",
            "1",
            "--set",
            "Destination=Local",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Applied to 1 item(s)."))
        .stdout(predicate::str::contains("Item 99"));
}

#[test]
fn test_cli_reset_follow_up() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wb_cmd()
        .args(["--database-file", db_arg, "party", "add", "Party"])
        .assert()
        .success();
    wb_cmd()
        .args(["--database-file", db_arg, "item", "add", "1", "Gasket"])
        .assert()
        .success();
    wb_cmd()
        .args([
            "--database-file",
            db_arg,
            "step",
            "submit",
            "--item",
            "1",
            "--step",
            "1",
            "--set",
            "Destination=Local",
        ])
        .assert()
        .success();

    wb_cmd()
        .args(["--database-file", db_arg, "step", "reset", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pending is now step 1"));
}

#[test]
fn test_cli_config_show_and_set() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wb_cmd()
        .args(["--database-file", db_arg, "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1. Destination: 1 hours"))
        .stdout(predicate::str::contains("Step 8. Bill Filing: 1 hours"));

    wb_cmd()
        .args([
            "--database-file",
            db_arg,
            "config",
            "set",
            "3",
            "--tat",
            "2",
            "--unit",
            "days",
            "--doer",
            "Production Head",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 3 TAT set to 2 days"));

    wb_cmd()
        .args(["--database-file", db_arg, "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 3. Production: 2 days (doer: Production Head)"));
}

#[test]
fn test_cli_cancel_hides_item_from_default_list() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wb_cmd()
        .args(["--database-file", db_arg, "party", "add", "Party"])
        .assert()
        .success();
    wb_cmd()
        .args(["--database-file", db_arg, "item", "add", "1", "Gasket"])
        .assert()
        .success();
    wb_cmd()
        .args(["--database-file", db_arg, "item", "cancel", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled item 1"));

    wb_cmd()
        .args(["--database-file", db_arg, "item", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found."));

    wb_cmd()
        .args(["--database-file", db_arg, "item", "list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Gasket"));
}

#[test]
fn test_cli_default_command_lists_items() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wb_cmd()
        .args(["--database-file", db_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found."));
}

#[test]
fn test_cli_item_report() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wb_cmd()
        .args(["--database-file", db_arg, "party", "add", "Party"])
        .assert()
        .success();
    wb_cmd()
        .args(["--database-file", db_arg, "item", "add", "1", "Gasket"])
        .assert()
        .success();

    wb_cmd()
        .args(["--database-file", db_arg, "item", "report", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Follow-up: Gasket (ID: 1)"))
        .stdout(predicate::str::contains("Pending: step 1"))
        .stdout(predicate::str::contains("8. Bill Filing: no target"));
}
