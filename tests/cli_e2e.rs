#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::process::Stdio;
use tempfile::TempDir;

const EXT: &str = ".gonzo.txt";

fn gonzo_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("gonzo").unwrap();
    cmd.env("GONZO_HOME", home)
        .env_remove("PAGER")
        .env_remove("GONZO_LOG")
        .env("NO_COLOR", "1")
        .env("EDITOR", "true");
    cmd
}

fn seed(home: &Path, names: &[&str]) {
    fs::create_dir_all(home).unwrap();
    for name in names {
        fs::write(home.join(format!("{}{}", name, EXT)), format!("note {}", name)).unwrap();
    }
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_new_then_list_and_read() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().join("notes");

    gonzo_cmd(&home)
        .args(["new", "remember", "the", "milk"])
        .assert()
        .success()
        .stdout(predicate::str::contains("saving to"));

    let listed = stdout_of(gonzo_cmd(&home).arg("list"));
    let ids: Vec<&str> = listed.lines().collect();
    assert_eq!(ids.len(), 1);
    assert!(home.join(format!("{}{}", ids[0], EXT)).is_file());

    gonzo_cmd(&home)
        .args(["read", "--cat"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("├──────────  {}  ──────────┤", ids[0])))
        .stdout(predicate::str::contains("remember the milk"));
}

#[test]
fn test_new_from_stdin() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().to_path_buf();

    gonzo_cmd(&home)
        .args(["new", "-"])
        .write_stdin("piped line one\npiped line two\n")
        .assert()
        .success();

    gonzo_cmd(&home)
        .args(["read", "-c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("piped line one\npiped line two\n"));
}

#[test]
fn test_new_with_editor_keeps_prefill() {
    let temp = TempDir::new().unwrap();
    let home = temp.path().to_path_buf();

    // EDITOR=true exits without touching the scratch file
    gonzo_cmd(&home)
        .args(["new", "-e", "drafted", "in", "editor"])
        .assert()
        .success();

    gonzo_cmd(&home)
        .args(["read", "-c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("drafted in editor"));
}

#[test]
fn test_new_empty_note_fails() {
    let temp = TempDir::new().unwrap();
    gonzo_cmd(temp.path())
        .arg("new")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("empty"));
}

#[test]
fn test_list_head_then_tail() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), &["a", "b", "c", "d", "e"]);

    let out = stdout_of(gonzo_cmd(temp.path()).args(["list", "--head", "3", "--tail", "2"]));
    assert_eq!(out, "b\nc\n");

    let out = stdout_of(gonzo_cmd(temp.path()).args(["list", "--head", "100", "--tail", "100"]));
    assert_eq!(out, "a\nb\nc\nd\ne\n");
}

#[test]
fn test_list_ignores_other_files() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), &["b", "a", "c"]);
    fs::write(temp.path().join("readme.md"), "nope").unwrap();

    let out = stdout_of(gonzo_cmd(temp.path()).arg("list"));
    assert_eq!(out, "a\nb\nc\n");
}

#[cfg(unix)]
#[test]
fn test_list_into_closed_pipe_exits_cleanly() {
    let temp = TempDir::new().unwrap();
    // Enough output to overflow the pipe buffer once the reader is gone
    let names: Vec<String> = (0..2000).map(|i| format!("{:0>120}", i)).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    seed(temp.path(), &refs);

    let mut child = std::process::Command::new(assert_cmd::cargo::cargo_bin("gonzo"))
        .arg("list")
        .env("GONZO_HOME", temp.path())
        .env("NO_COLOR", "1")
        .env_remove("PAGER")
        .env_remove("GONZO_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    let mut first = String::new();
    BufReader::new(child.stdout.take().unwrap())
        .read_line(&mut first)
        .unwrap();
    assert_eq!(first.trim_end(), names[0]);

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success(), "exit status {}", output.status);
    assert!(!String::from_utf8_lossy(&output.stderr).contains("panicked"));
}

#[test]
fn test_read_reverse_from_anchor() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), &["a", "b", "c", "d"]);

    let out = stdout_of(gonzo_cmd(temp.path()).args(["read", "-r", "-c", "b"]));
    let b = out.find("note b").unwrap();
    let a = out.find("note a").unwrap();
    assert!(b < a);
    assert!(!out.contains("note c"));
    assert!(!out.contains("note d"));
}

#[cfg(unix)]
#[test]
fn test_read_through_pager() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), &["a"]);

    gonzo_cmd(temp.path())
        .env("PAGER", "cat")
        .arg("read")
        .assert()
        .success()
        .stdout(predicate::str::contains("note a"));
}

#[cfg(unix)]
#[test]
fn test_failing_pager_fails_read() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), &["a"]);

    gonzo_cmd(temp.path())
        .env("PAGER", "false")
        .arg("read")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Pager"));
}

#[test]
fn test_delete_partial_failure() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), &["x", "z"]);

    gonzo_cmd(temp.path())
        .args(["delete", "x", "y", "z"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Note deleted: x"))
        .stdout(predicate::str::contains("Note deleted: z"))
        .stderr(predicate::str::contains("Note not found: y"));

    assert!(!temp.path().join(format!("x{}", EXT)).exists());
    assert!(!temp.path().join(format!("z{}", EXT)).exists());
}

#[test]
fn test_edit_missing_note_fails() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), &["a"]);

    gonzo_cmd(temp.path())
        .args(["edit", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Note not found: nope"));
}

#[test]
fn test_edit_latest_with_unchanged_content() {
    let temp = TempDir::new().unwrap();
    seed(temp.path(), &["a", "b"]);

    gonzo_cmd(temp.path())
        .arg("edit")
        .assert()
        .success()
        .stdout(predicate::str::contains("No changes to b"));
}
