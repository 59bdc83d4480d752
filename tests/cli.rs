//! End-to-end tests driving the `todo` binary against a temporary data file.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn todo(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("todo").expect("todo binary builds");
    cmd.arg("--db").arg(db);
    cmd
}

#[test]
fn add_and_list_roundtrip() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("todos.json");

    todo(&db)
        .args(["add", "Buy", "groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added todo [1]: Buy groceries"));

    todo(&db)
        .args(["sub", "1", "Buy milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Added sub-todo [2] under [1]: Buy milk",
        ));

    todo(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Buy groceries"))
        .stdout(predicate::str::contains("  [2] Buy milk"));
}

#[test]
fn list_on_empty_store_prints_hint() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("todos.json");

    todo(&db)
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos found"));
}

#[test]
fn sub_with_unknown_parent_fails() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("todos.json");

    todo(&db)
        .args(["sub", "99", "orphan"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parent todo with ID 99 not found"));

    // The failed call must not have created anything.
    todo(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos found"));
}

#[test]
fn done_archives_and_removes_subtree() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("todos.json");

    todo(&db).args(["add", "groceries"]).assert().success();
    todo(&db).args(["sub", "1", "milk"]).assert().success();
    todo(&db).args(["sub", "1", "eggs"]).assert().success();
    todo(&db).args(["sub", "2", "oat milk"]).assert().success();

    todo(&db)
        .args(["done", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed todo [1]: groceries"))
        .stdout(predicate::str::contains("2 direct subtask(s)"));

    // The whole subtree is gone, grandchild included.
    todo(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos found"));

    todo(&db)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed todos: 1"))
        .stdout(predicate::str::contains("[1] groceries"))
        .stdout(predicate::str::contains("2 subtask(s)"));
}

#[test]
fn done_with_unknown_id_fails() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("todos.json");

    todo(&db)
        .args(["done", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("todo with ID 7 not found"));
}

#[test]
fn delete_cascades_and_second_delete_fails() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("todos.json");

    todo(&db).args(["add", "project"]).assert().success();
    todo(&db).args(["sub", "1", "step one"]).assert().success();
    todo(&db).args(["add", "unrelated"]).assert().success();

    todo(&db)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted todo [1] and all its sub-todos",
        ));

    todo(&db)
        .args(["rm", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("todo with ID 1 not found"));

    // Deletion leaves no archive entry behind.
    todo(&db)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed todos: 0"));

    todo(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[3] unrelated"));
}

#[test]
fn renumber_compacts_ids_depth_first() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("todos.json");

    todo(&db).args(["add", "alpha"]).assert().success();
    todo(&db).args(["add", "beta"]).assert().success();
    todo(&db).args(["sub", "2", "beta child"]).assert().success();
    todo(&db).args(["delete", "1"]).assert().success();

    todo(&db)
        .arg("renumber")
        .assert()
        .success()
        .stdout(predicate::str::contains("Renumbered 2 todo(s)."));

    todo(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] beta"))
        .stdout(predicate::str::contains("  [2] beta child"));

    // New ids continue after the compacted range.
    todo(&db)
        .args(["add", "gamma"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added todo [3]: gamma"));
}

#[test]
fn corrupt_data_file_starts_fresh() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("todos.json");
    std::fs::write(&db, "{this is not json").unwrap();

    todo(&db)
        .args(["add", "recovered"])
        .assert()
        .success()
        .stderr(predicate::str::contains("starting fresh"))
        .stdout(predicate::str::contains("Added todo [1]: recovered"));

    todo(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] recovered"));
}

#[test]
fn stats_does_not_persist_anything() {
    let dir = tempdir().unwrap();
    let db = dir.path().join("todos.json");

    todo(&db).arg("stats").assert().success();
    assert!(!db.exists());
}
