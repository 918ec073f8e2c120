mod common;

use anyhow::Result;
use assert_cmd::Command;
use common::TestMonitor;
use predicates::prelude::*;
use std::fs;

fn vigil(fixture: &TestMonitor) -> Command {
    let mut cmd = Command::cargo_bin("vigil").expect("vigil binary");
    cmd.arg(&fixture.config_path);
    cmd
}

#[test]
fn test_invalid_config_exits_nonzero() -> Result<()> {
    let fixture = TestMonitor::new()?;
    fs::write(&fixture.config_path, "not valid toml [[[")?;

    vigil(&fixture)
        .arg("init")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid config file"));

    // The failure happened before any store operation.
    assert!(!fixture.store_path.exists());

    Ok(())
}

#[test]
fn test_missing_command_shows_usage() -> Result<()> {
    Command::cargo_bin("vigil")?
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));

    Ok(())
}

#[test]
fn test_init_creates_store() -> Result<()> {
    let fixture = TestMonitor::new()?;
    fixture.write_data_file("a.txt", "alpha")?;
    fixture.write_data_file("b.txt", "bravo")?;

    vigil(&fixture)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Store initialized with 2 files"));

    assert!(fixture.store_path.exists());

    Ok(())
}

#[test]
fn test_show_lists_records() -> Result<()> {
    let fixture = TestMonitor::new()?;
    fixture.write_data_file("a.txt", "alpha")?;

    vigil(&fixture).arg("init").assert().success();

    vigil(&fixture)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("Original Hash:"))
        .stdout(predicate::str::contains("New Hash:         Not checked."))
        .stdout(predicate::str::contains("Number of files monitored: 1"));

    Ok(())
}

#[test]
fn test_diff_clean_reports_nothing() -> Result<()> {
    let fixture = TestMonitor::new()?;
    fixture.write_data_file("a.txt", "alpha")?;

    vigil(&fixture).arg("init").assert().success();

    vigil(&fixture)
        .arg("diff")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of modified files: 0"));

    Ok(())
}

#[test]
fn test_full_lifecycle() -> Result<()> {
    let fixture = TestMonitor::new()?;
    let a = fixture.write_data_file("a.txt", "a v1")?;
    let b = fixture.write_data_file("b.txt", "b v1")?;

    vigil(&fixture).arg("init").assert().success();

    // Modify a, delete b, add c.
    fs::write(&a, "a v2")?;
    fs::remove_file(&b)?;
    fixture.write_data_file("c.txt", "c v1")?;

    vigil(&fixture)
        .arg("diff")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.txt"))
        .stdout(predicate::str::contains("File deleted."))
        .stdout(predicate::str::contains("New File."))
        .stdout(predicate::str::contains("Number of modified files: 3"));

    vigil(&fixture)
        .arg("update")
        .assert()
        .success()
        .stdout(predicate::str::contains("Store updated"));

    // b is gone from monitoring; a and c carry fresh baselines.
    vigil(&fixture)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of files monitored: 2"))
        .stdout(predicate::str::contains("b.txt").not());

    vigil(&fixture)
        .arg("diff")
        .assert()
        .success()
        .stdout(predicate::str::contains("Number of modified files: 0"));

    Ok(())
}

#[test]
fn test_diff_without_init_discovers_everything() -> Result<()> {
    // Running diff against an absent store treats every resolved file as new.
    let fixture = TestMonitor::new()?;
    fixture.write_data_file("a.txt", "alpha")?;

    vigil(&fixture)
        .arg("diff")
        .assert()
        .success()
        .stdout(predicate::str::contains("New File."))
        .stdout(predicate::str::contains("Number of modified files: 1"));

    Ok(())
}
