//! CLI integration tests for taskflow.
//!
//! These exercise the binary as a black box against an isolated data file,
//! covering command paths, error handling, and persistence between runs.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct CliHarness {
    temp: TempDir,
}

impl CliHarness {
    fn new() -> Self {
        Self {
            temp: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("taskflow").expect("Failed to find taskflow binary");
        cmd.current_dir(self.temp.path());
        cmd.env("TASKFLOW_DATA_FILE", self.temp.path().join("tasks.json"));
        cmd.env_remove("TASKFLOW_SAMPLE_DATA");
        cmd
    }

    fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.cmd().args(args).assert().success()
    }

    fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.cmd().args(args).assert().failure()
    }

    /// Runs a command expected to succeed and returns its stdout.
    fn stdout_of(&self, args: &[&str]) -> String {
        let output = self.cmd().args(args).output().expect("Failed to run command");
        assert!(
            output.status.success(),
            "command {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }
}

/// Pulls the value following `marker` out of a command's stdout.
fn extract_after(output: &str, marker: &str) -> String {
    output
        .lines()
        .find_map(|line| line.split(marker).nth(1))
        .unwrap_or_else(|| panic!("marker '{marker}' not found in output:\n{output}"))
        .trim()
        .to_string()
}

#[test]
fn test_cli_help_and_version() {
    let harness = CliHarness::new();

    harness
        .run_success(&["--help"])
        .stdout(predicate::str::contains("task tracker"));

    harness
        .run_success(&["--version"])
        .stdout(predicate::str::contains("taskflow"));

    harness.run_failure(&["invalid-command"]);
}

#[test]
fn test_add_requires_category() {
    let harness = CliHarness::new();
    harness.run_failure(&["add", "No Category Task"]);
}

#[test]
fn test_category_and_task_workflow() {
    let harness = CliHarness::new();

    harness
        .run_success(&["category", "add", "Work", "--color", "#6366f1"])
        .stdout(predicate::str::contains("Created category:"));
    harness
        .run_success(&["category", "list"])
        .stdout(predicate::str::contains("Work"));

    harness
        .run_success(&[
            "add",
            "Quarterly report",
            "--category",
            "work",
            "--priority",
            "high",
            "--due",
            "2030-06-01",
        ])
        .stdout(predicate::str::contains("Created task:"));

    harness
        .run_success(&["list"])
        .stdout(predicate::str::contains("Quarterly report"));
    harness
        .run_success(&["list", "--search", "quarterly"])
        .stdout(predicate::str::contains("Quarterly report"));
    harness
        .run_success(&["list", "--search", "nonexistent"])
        .stdout(predicate::str::contains("No tasks found."));
    harness
        .run_success(&["list", "--completed"])
        .stdout(predicate::str::contains("No tasks found."));

    // Unknown category fails before anything is stored.
    harness
        .run_failure(&["add", "Orphan", "--category", "nope"])
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_complete_and_reopen_task() {
    let harness = CliHarness::new();
    harness.run_success(&["category", "add", "Personal"]);

    let output = harness.stdout_of(&["add", "Book dentist", "--category", "Personal"]);
    let task_id = extract_after(&output, "Task ID: ");

    harness
        .run_success(&["do", &task_id])
        .stdout(predicate::str::contains("Completed task: 'Book dentist'"));
    harness
        .run_success(&["list", "--completed"])
        .stdout(predicate::str::contains("Book dentist"));

    harness
        .run_success(&["do", &task_id])
        .stdout(predicate::str::contains("Reopened task: 'Book dentist'"));
    harness
        .run_success(&["list", "--completed"])
        .stdout(predicate::str::contains("No tasks found."));
}

#[test]
fn test_recurring_task_completion_generates_next() {
    let harness = CliHarness::new();
    harness.run_success(&["category", "add", "Work"]);

    let output = harness.stdout_of(&[
        "add",
        "Daily standup",
        "--category",
        "Work",
        "--due",
        "2020-01-01",
        "--every",
        "daily",
    ]);
    assert!(output.contains("Created recurring task:"));
    let task_id = extract_after(&output, "Task ID: ");

    harness
        .run_success(&["do", &task_id])
        .stdout(predicate::str::contains("Completed task: 'Daily standup'"))
        .stdout(predicate::str::contains(
            "Created recurring task 'Daily standup' due 2020-01-02",
        ));
}

#[test]
fn test_series_retires_past_end_date() {
    let harness = CliHarness::new();
    harness.run_success(&["category", "add", "Work"]);

    let output = harness.stdout_of(&[
        "add",
        "Biweekly review",
        "--category",
        "Work",
        "--due",
        "2024-01-01",
        "--every",
        "weekly",
        "--interval",
        "2",
        "--until",
        "2024-01-20",
    ]);
    let series_id = extract_after(&output, "Series ID: ");

    harness
        .run_success(&["recur", "info", &series_id])
        .stdout(predicate::str::contains("every 2 weeks"))
        .stdout(predicate::str::contains("active"));

    // 2024-01-15 is long past due; generating it pushes the candidate past
    // the end date and retires the series.
    harness
        .run_success(&["recur", "generate", &series_id])
        .stdout(predicate::str::contains(
            "Generated instance 'Biweekly review' due 2024-01-15",
        ));
    harness
        .run_success(&["recur", "info", &series_id])
        .stdout(predicate::str::contains("paused"));
    harness
        .run_success(&["recur", "generate", &series_id])
        .stdout(predicate::str::contains("Series is not due"));
}

#[test]
fn test_recur_pause_resume_and_delete() {
    let harness = CliHarness::new();
    harness.run_success(&["category", "add", "Home"]);

    let output = harness.stdout_of(&[
        "add",
        "Water plants",
        "--category",
        "Home",
        "--due",
        "2020-01-01",
        "--every",
        "daily",
    ]);
    let series_id = extract_after(&output, "Series ID: ");
    let task_id = extract_after(&output, "Task ID: ");

    harness
        .run_success(&["recur", "pause", &series_id])
        .stdout(predicate::str::contains("Paused series: 'Water plants'"));
    harness
        .run_success(&["recur", "generate", &series_id])
        .stdout(predicate::str::contains("Series is not due"));
    harness
        .run_success(&["recur", "resume", &series_id])
        .stdout(predicate::str::contains("Resumed series: 'Water plants'"));

    // Completing while active generates a second instance; deleting the
    // series removes them all.
    harness.run_success(&["do", &task_id]);
    harness
        .run_success(&["recur", "delete", &series_id, "--force"])
        .stdout(predicate::str::contains("Deleted series: 'Water plants'"));
    harness
        .run_success(&["list"])
        .stdout(predicate::str::contains("No tasks found."));
    harness
        .run_success(&["recur", "list"])
        .stdout(predicate::str::contains("No recurring series found."));
}

#[test]
fn test_archive_workflow() {
    let harness = CliHarness::new();
    harness.run_success(&["category", "add", "Personal"]);

    let output = harness.stdout_of(&["add", "Old errand", "--category", "Personal"]);
    let task_id = extract_after(&output, "Task ID: ");

    harness
        .run_success(&["archive", &task_id])
        .stdout(predicate::str::contains("Archived task: 'Old errand'"));
    harness
        .run_success(&["list"])
        .stdout(predicate::str::contains("No tasks found."));
    harness
        .run_success(&["list", "--archived"])
        .stdout(predicate::str::contains("Old errand"));

    harness
        .run_success(&["unarchive", &task_id])
        .stdout(predicate::str::contains("Unarchived task: 'Old errand'"));
    harness
        .run_success(&["list"])
        .stdout(predicate::str::contains("Old errand"));
}

#[test]
fn test_delete_task() {
    let harness = CliHarness::new();
    harness.run_success(&["category", "add", "Personal"]);

    let output = harness.stdout_of(&["add", "Disposable", "--category", "Personal"]);
    let task_id = extract_after(&output, "Task ID: ");

    harness
        .run_success(&["delete", &task_id, "--force"])
        .stdout(predicate::str::contains("Task deleted."));
    harness
        .run_failure(&["delete", &task_id, "--force"])
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_delete_category_with_tasks_rejected() {
    let harness = CliHarness::new();
    harness.run_success(&["category", "add", "Busy"]);
    harness.run_success(&["add", "Holder", "--category", "Busy"]);

    harness
        .run_failure(&["category", "delete", "Busy"])
        .stderr(predicate::str::contains("still referenced"));
}

#[test]
fn test_edit_task() {
    let harness = CliHarness::new();
    harness.run_success(&["category", "add", "Work"]);

    let output = harness.stdout_of(&["add", "Draft email", "--category", "Work"]);
    let task_id = extract_after(&output, "Task ID: ");

    harness
        .run_success(&[
            "edit",
            &task_id,
            "--title",
            "Send email",
            "--priority",
            "low",
            "--due",
            "2030-01-15",
        ])
        .stdout(predicate::str::contains("Updated task: 'Send email'"));
    harness
        .run_success(&["list", "--priority", "low"])
        .stdout(predicate::str::contains("Send email"));
}

#[test]
fn test_sample_data_seeding() {
    let harness = CliHarness::new();

    harness
        .cmd()
        .env("TASKFLOW_SAMPLE_DATA", "true")
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Water the plants"));

    // The seeded snapshot persists for later runs.
    harness
        .run_success(&["category", "list"])
        .stdout(predicate::str::contains("Personal"));
}
