use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn okr_cmd() -> Command {
    let mut cmd = Command::cargo_bin("okr").expect("Failed to find okr binary");
    cmd.args(["--no-color", "--seed", "7"]);
    cmd
}

/// Helper function to write a session script into the test directory
fn write_script(dir: &TempDir, lines: &[&str]) -> String {
    let path = dir.path().join("session.okr");
    fs::write(&path, lines.join("\n")).expect("Failed to write script");
    path.to_str().unwrap().to_string()
}

#[test]
fn test_cli_default_prints_navigation() {
    okr_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("# SelamNew Workspace"))
        .stdout(predicate::str::contains("- **▾ OKR**"))
        .stdout(predicate::str::contains("  - Planning and Reporting"))
        .stdout(predicate::str::contains("**My OKR** | Team OKR"));
}

#[test]
fn test_cli_nav_select_collapses_okr() {
    okr_cmd()
        .args(["nav", "--select", "OKR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **▸ OKR**"))
        .stdout(predicate::str::contains("Planning and Reporting").not());
}

#[test]
fn test_cli_nav_expands_payroll() {
    okr_cmd()
        .args(["nav", "--select", "Payroll", "--select", "My Payroll"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- ▾ Payroll"))
        .stdout(predicate::str::contains("  - **My Payroll**"))
        .stdout(predicate::str::contains("My OKR").not());
}

#[test]
fn test_cli_nav_select_nested_okr_keeps_parent_open() {
    okr_cmd()
        .args(["nav", "--select", "OKR > OKR"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- **▾ OKR**"))
        .stdout(predicate::str::contains("  - **OKR**"))
        .stdout(predicate::str::contains("  - Planning and Reporting"));
}

#[test]
fn test_cli_nav_unknown_path_reports_error() {
    okr_cmd()
        .args(["nav", "--select", "Payroll > Bonuses"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No navigation entry at 'Payroll > Bonuses'"));
}

#[test]
fn test_cli_alignments() {
    okr_cmd()
        .arg("alignments")
        .assert()
        .success()
        .stdout(predicate::str::contains("# Supervisor Key Results"))
        .stdout(predicate::str::contains(
            "1. Increase customer retention rate by 15%",
        ))
        .stdout(predicate::str::contains("5. Expand market share by 12%"));
}

#[test]
fn test_cli_session_alignment_and_save() {
    let temp_dir = create_cli_test_environment();
    let script = write_script(
        &temp_dir,
        &[
            "# draft a retention objective",
            "open",
            "align 1",
            "",
            "weight 1 40",
            "deadline 2026-12-31",
            "save",
        ],
    );

    okr_cmd()
        .args(["session", "--script", &script])
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: Opened a new objective draft"))
        .stdout(predicate::str::contains(
            "# Objective: Increase customer retention rate by 15%",
        ))
        .stdout(predicate::str::contains(
            "### 1. Retain 2,000,000 by the end of the month (25%)",
        ))
        .stdout(predicate::str::contains("Weight: 40%"))
        .stdout(predicate::str::contains("Objective deadline set to 2026-12-31"))
        .stdout(predicate::str::contains("Saved objective with 4 key results"))
        .stdout(predicate::str::contains("- Deadline: December 31st, 2026"));
}

#[test]
fn test_cli_session_invalid_weight_is_ignored() {
    let temp_dir = create_cli_test_environment();
    let script = write_script(
        &temp_dir,
        &["open", "add", "weight 1 abc", "weight 1 101", "weight 1 50%", "show"],
    );

    okr_cmd()
        .args(["session", "--script", &script])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ignored: Weight 'abc'"))
        .stdout(predicate::str::contains("Ignored: Weight '101'"))
        .stdout(predicate::str::contains("### 1. _(no text)_ (50%)"));
}

#[test]
fn test_cli_session_from_stdin() {
    okr_cmd()
        .arg("session")
        .write_stdin("open\nadd\ntext 1 Ship onboarding revamp\nmilestone 1\nshow\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. Ship onboarding revamp (25%)"))
        .stdout(predicate::str::contains("#### Milestones (0/1)"))
        .stdout(predicate::str::contains("- ○ Milestone"));
}

#[test]
fn test_cli_session_bad_lines_continue() {
    okr_cmd()
        .arg("session")
        .write_stdin("launch\nopen\ndeadline tomorrow\ndelete 42\nadd\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("line 1:"))
        .stderr(predicate::str::contains("Error: line 3:"))
        .stdout(predicate::str::contains("Ignored: Key result with ID 42 not found"))
        .stdout(predicate::str::contains("Added key result with ID: 1"));
}

#[test]
fn test_cli_session_mutations_before_open_are_ignored() {
    okr_cmd()
        .arg("session")
        .write_stdin("add\nsave\ncancel\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ignored: No objective is being drafted"))
        .stdout(predicate::str::contains("Added key result").not());
}

#[test]
fn test_cli_session_suggestion_card() {
    okr_cmd()
        .arg("session")
        .write_stdin("open\nsuggest\naccept\ndismiss\nshow\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("> ✦ **AI Key Result Suggestion**"))
        .stdout(predicate::str::contains("Added key result with ID: 1"))
        .stdout(predicate::str::contains("Ignored: No suggestion is showing"))
        .stdout(predicate::str::contains("- ✦ This is a Key Result from the AI"));
}

#[test]
fn test_cli_session_regenerate() {
    okr_cmd()
        .arg("session")
        .write_stdin("open\nadd\nregen 1\nregen 1 customer loyalty\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Ignored: Describe what the key result should focus on",
        ))
        .stdout(predicate::str::contains("customer loyalty"));
}

#[test]
fn test_cli_session_text_keeps_spacing() {
    okr_cmd()
        .arg("session")
        .write_stdin("open\nadd\ntext 1 Ship  v2   to beta\nshow\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("### 1. Ship  v2   to beta (25%)"));
}

#[test]
fn test_cli_session_alignment_opens_suggestion_card() {
    okr_cmd()
        .arg("session")
        .write_stdin("open\nalign 1\naccept\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "> ✦ **AI Key Result Suggestion** (I have made you 4 Suggestions)",
        ))
        .stdout(predicate::str::contains("Added key result with ID: 5"));
}

#[test]
fn test_cli_session_quit_stops_reading() {
    okr_cmd()
        .arg("session")
        .write_stdin("open\nquit\nadd\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Opened a new objective draft"))
        .stdout(predicate::str::contains("Added key result").not());
}

#[test]
fn test_cli_session_missing_script() {
    let temp_dir = create_cli_test_environment();
    let missing = temp_dir.path().join("missing.okr");

    okr_cmd()
        .args(["session", "--script", missing.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open script"));
}

#[test]
fn test_cli_chat_replies() {
    okr_cmd()
        .args(["chat", "How do weights work?", "--delay-ms", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**You:** How do weights work?"))
        .stdout(predicate::str::contains(
            "**Selam:** Thank you for your message!",
        ));
}

#[test]
fn test_cli_chat_blank_message_shows_greeting() {
    okr_cmd()
        .args(["chat", "   ", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Selam, What can I help you for today?",
        ));
}

#[test]
fn test_cli_chat_requires_message() {
    okr_cmd().arg("chat").assert().failure();
}
