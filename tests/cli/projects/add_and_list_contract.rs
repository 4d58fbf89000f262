use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn add_is_idempotent_and_listed() {
    let ctx = TestContext::new();
    ctx.init();

    ctx.cli()
        .args(["projects", "add", "flow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added project: flow"));
    let after_first = ctx.config_hash();

    ctx.cli()
        .args(["projects", "add", "flow"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(ctx.config_hash(), after_first);

    ctx.cli()
        .args(["projects", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Projects").and(predicate::str::contains("flow")));
}

#[test]
fn commands_without_config_point_to_init() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["projects", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("flowutils init"));
}
