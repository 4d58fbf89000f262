use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_writes_config_with_given_locations() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["init", "--link-location", "./CustomLinks"])
        .args(["--project-location", "./CustomProjects"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config file at:"));

    let content = ctx.read_config();
    assert!(content.contains("./CustomLinks"));
    assert!(content.contains("./CustomProjects"));
}

#[test]
fn init_without_flags_uses_defaults_when_not_interactive() {
    let ctx = TestContext::new();

    ctx.cli().arg("init").assert().success();

    let content = ctx.read_config();
    assert!(content.contains("~/Links"));
    assert!(content.contains("~/Projects"));
}

#[test]
fn init_capture_records_existing_projects() {
    let ctx = TestContext::new();
    ctx.mkdir("Projects/Project1");
    ctx.mkdir("Projects/.cache");
    let projects = ctx.home().join("Projects");

    ctx.cli()
        .args(["init", "--capture", "--project-location"])
        .arg(&projects)
        .assert()
        .success()
        .stdout(predicate::str::contains("Captured 1 project(s)"));

    ctx.cli().args(["projects", "list"]).assert().success().stdout(
        predicate::str::contains("Project1").and(predicate::str::contains(".cache").not()),
    );
}
