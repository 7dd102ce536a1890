use std::path::Path;
use std::process::{Command, Output};

fn todo(data_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_todo"))
        .args(args)
        .env("TODO_DATA", data_dir)
        .env("TODO_LOG", "info")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn add_list_done_clear_round_through_the_binary() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");

    let added = todo(&data_dir, &["add", "Task1", "--desc", "Desc", "--due", "2024-12-31"]);
    assert!(added.status.success());
    assert_eq!(stdout(&added), "Added task #1: Task1\n");

    let added = todo(&data_dir, &["add", "Task2"]);
    assert_eq!(stdout(&added), "Added task #2: Task2\n");

    let done = todo(&data_dir, &["done", "1"]);
    assert_eq!(stdout(&done), "Task #1 marked as done.\n");

    let listed = todo(&data_dir, &["list", "--all"]);
    assert_eq!(
        stdout(&listed),
        "[ ] #2 Task2\n[x] #1 Task1 (due 2024-12-31)\n    Desc\n"
    );

    let cleared = todo(&data_dir, &["clear-done"]);
    assert_eq!(stdout(&cleared), "Removed 1 completed task(s).\n");

    assert!(data_dir.join("tasks.db").exists());
    assert!(data_dir.join("logs").is_dir());
}

#[test]
fn missing_id_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let output = todo(dir.path(), &["delete", "42"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Task #42 not found.\n");
}

#[test]
fn blank_title_exits_with_validation_status() {
    let dir = tempfile::tempdir().unwrap();

    let output = todo(dir.path(), &["add", "  "]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("title must not be empty"));
}

#[test]
fn unusable_data_dir_exits_with_failure() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, b"x").unwrap();

    let output = todo(&blocker, &["list"]);
    assert_eq!(output.status.code(), Some(1));
}
