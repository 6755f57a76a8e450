//! Integration tests for taskpad
//!
//! These drive the compiled binary with piped stdin and assert on the
//! printed surface. Prompt text is rendered by the line editor and is not
//! part of piped output, so assertions stick to the lines the shell
//! prints itself.

use assert_cmd::Command;
use predicates::prelude::*;

fn tp() -> Command {
    Command::cargo_bin("tp").expect("binary should build")
}

#[test]
fn menu_is_rendered_verbatim() {
    tp().write_stdin("0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Welcome to my Todo App\n\
             ========\n\
             1. Add Task\n\
             2. View Tasks\n\
             3. Update Task\n\
             4. Delete Task\n\
             5. Mark as Complete/Incomplete\n\
             0. Exit\n",
        ))
        .stdout(predicate::str::contains("Goodbye! Have a nice day."));
}

#[test]
fn add_and_list_round() {
    tp().write_stdin("1\nBuy milk\n2%\n2\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task added successfully (ID: 1)."))
        .stdout(predicate::str::contains("Tasks:\n------\n1. [ ] Buy milk - 2%"));
}

#[test]
fn list_empty_store() {
    tp().write_stdin("2\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks yet. Add one!"));
}

#[test]
fn invalid_integer_then_recover() {
    tp().write_stdin("not a number\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Please enter a valid integer."))
        .stdout(predicate::str::contains("Goodbye! Have a nice day."));
}

#[test]
fn out_of_range_menu_choice() {
    tp().write_stdin("42\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Option 42 not valid. Please choose 0-5."));
}

#[test]
fn delete_missing_task_reports_not_found() {
    tp().write_stdin("4\n99\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task with ID 99 not found."));
}

#[test]
fn toggle_marks_complete() {
    tp().write_stdin("1\nShip release\n\n5\n1\n2\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task marked as complete."))
        .stdout(predicate::str::contains("1. [X] Ship release - "));
}

#[test]
fn end_of_input_is_a_graceful_goodbye() {
    tp().write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"))
        .stdout(predicate::str::contains("Have a nice day").not());
}

#[test]
fn missing_explicit_config_fails() {
    tp().args(["--config", "/nonexistent/taskpad.yml"])
        .write_stdin("0\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}
