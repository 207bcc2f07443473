use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with plain output and a clean
/// environment
fn stride_cmd(data_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stride").expect("Failed to find stride binary");
    cmd.env_remove("STRIDE_USER_ID")
        .env_remove("STRIDE_API_URL")
        .env_remove("STRIDE_TOKEN")
        .arg("--no-color")
        .arg("--data-file")
        .arg(data_file);
    cmd
}

fn read_outbox(path: &Path) -> Vec<Value> {
    let content = fs::read_to_string(path).expect("Failed to read outbox");
    serde_json::from_str(&content).expect("Outbox is not valid JSON")
}

#[test]
fn test_cli_create_program_success() {
    let temp_dir = create_cli_test_environment();
    let data_file = temp_dir.path().join("programs.json");

    stride_cmd(&data_file)
        .args([
            "--user-id",
            "coach-1",
            "create",
            "Spring Block",
            "--type",
            "Strength",
            "--type",
            "Cardio",
            "--weeks",
            "8",
            "--public",
            "--phase",
            "Base:1-4",
            "--phase",
            "Peak:5-8",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created program with ID: 1"))
        .stdout(predicate::str::contains("# 1. Spring Block"))
        .stdout(predicate::str::contains("- Access: Public"))
        .stdout(predicate::str::contains("2. Peak (weeks 5-8)"));

    let programs = read_outbox(&data_file);
    assert_eq!(programs.len(), 1);
    let program = &programs[0];
    assert_eq!(program["types"], serde_json::json!(["strength", "cardio"]));
    assert_eq!(program["numWeeks"], 8);
    assert_eq!(program["accessType"], "PUBLIC");
    assert_eq!(program["admins"], serde_json::json!(["coach-1"]));
    assert_eq!(program["createdBy"], "coach-1");
    assert_eq!(program["phases"][0]["endWeek"], 4);
}

#[test]
fn test_cli_create_assigns_sequential_ids() {
    let temp_dir = create_cli_test_environment();
    let data_file = temp_dir.path().join("programs.json");

    for name in ["First", "Second"] {
        stride_cmd(&data_file)
            .args(["--user-id", "coach-1", "create", name])
            .assert()
            .success();
    }

    let programs = read_outbox(&data_file);
    assert_eq!(programs.len(), 2);
    assert_eq!(programs[1]["id"], "2");
    assert_eq!(programs[1]["name"], "Second");
}

#[test]
fn test_cli_create_without_user_fails() {
    let temp_dir = create_cli_test_environment();
    let data_file = temp_dir.path().join("programs.json");

    stride_cmd(&data_file)
        .args(["create", "Orphan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No signed-in user"));

    assert!(!data_file.exists());
}

#[test]
fn test_cli_create_weeks_sync_first_phase() {
    let temp_dir = create_cli_test_environment();
    let data_file = temp_dir.path().join("programs.json");

    stride_cmd(&data_file)
        .args(["--user-id", "coach-1", "create", "Long Haul", "--weeks", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Phase 1 (weeks 1-12)"));
}

#[test]
fn test_cli_preview_does_not_submit() {
    let temp_dir = create_cli_test_environment();
    let data_file = temp_dir.path().join("programs.json");

    stride_cmd(&data_file)
        .args([
            "--user-id",
            "coach-1",
            "preview",
            "Dry Run",
            "-t",
            "Mobility",
            "--nutrition",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Dry Run"))
        .stdout(predicate::str::contains("\"types\": [\n    \"mobility\"\n  ]"))
        .stdout(predicate::str::contains("\"hasNutritionProgram\": true"))
        .stdout(predicate::str::contains("\"accessType\": \"PRIVATE\""));

    assert!(!data_file.exists());
}

#[test]
fn test_cli_schema() {
    let temp_dir = create_cli_test_environment();
    let data_file = temp_dir.path().join("programs.json");

    stride_cmd(&data_file)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("numWeeks"))
        .stdout(predicate::str::contains("hasNutritionProgram"));
}

#[test]
fn test_cli_interactive_submission() {
    let temp_dir = create_cli_test_environment();
    let data_file = temp_dir.path().join("programs.json");

    stride_cmd(&data_file)
        .args(["--user-id", "coach-9", "new"])
        .write_stdin(
            "name Couch to 5k\n\
             toggle Cardio\n\
             next\n\
             weeks 9\n\
             next\n\
             nutrition yes\n\
             next\n\
             next\n\
             public\n\
             next\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Step 1 of 5"))
        .stdout(predicate::str::contains("## Visibility"))
        .stdout(predicate::str::contains("Created program with ID: 1"));

    let programs = read_outbox(&data_file);
    assert_eq!(programs[0]["name"], "Couch to 5k");
    assert_eq!(programs[0]["numWeeks"], 9);
    assert_eq!(programs[0]["hasNutritionProgram"], true);
    assert_eq!(programs[0]["phases"][0]["endWeek"], 9);
    assert_eq!(programs[0]["createdBy"], "coach-9");
}

#[test]
fn test_cli_interactive_end_of_input_does_not_submit() {
    let temp_dir = create_cli_test_environment();
    let data_file = temp_dir.path().join("programs.json");

    stride_cmd(&data_file)
        .args(["--user-id", "coach-9", "new"])
        .write_stdin("name Unfinished\nnext\nback\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Frequency"));

    assert!(!data_file.exists());
}

#[test]
fn test_cli_interactive_reports_bad_commands() {
    let temp_dir = create_cli_test_environment();
    let data_file = temp_dir.path().join("programs.json");

    stride_cmd(&data_file)
        .arg("new")
        .write_stdin("jump\nweeks 5\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: unknown command 'jump'"))
        .stdout(predicate::str::contains("Error: nothing changed on this step"));
}

#[test]
fn test_cli_interactive_rejection_keeps_wizard_open() {
    let temp_dir = create_cli_test_environment();
    let data_file = temp_dir.path().join("programs.json");

    stride_cmd(&data_file)
        .arg("new")
        .write_stdin("next\nnext\nnext\nnext\nnext\nreview\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: No signed-in user"))
        .stdout(predicate::str::contains("Type `next` to try again."))
        .stdout(predicate::str::contains("# (untitled)"));

    assert!(!data_file.exists());
}
