use crate::harness::{TestContext, hash_file};
use predicates::prelude::*;
use std::path::PathBuf;

#[test]
fn backup_is_byte_identical_copy() {
    let ctx = TestContext::new();
    ctx.init();

    let assert = ctx.cli().args(["config", "backup"]).assert().success();
    let output = assert.get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();
    let backup = stdout
        .trim()
        .rsplit("Config backed up to: ")
        .next()
        .map(PathBuf::from)
        .expect("backup path printed");

    assert!(backup.is_file());
    assert_ne!(backup, ctx.config_path());
    assert_eq!(hash_file(&backup), ctx.config_hash());
}

#[test]
fn backup_without_config_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["config", "backup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn path_prints_resolved_location() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(ctx.config_path().to_string_lossy().into_owned()));
}
