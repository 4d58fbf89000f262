use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn add_stores_absolute_target() {
    let ctx = TestContext::new();
    ctx.init();

    ctx.cli().args(["links", "add", "../shared/./notes", "notes"]).assert().success();

    let expected = format!("notes -> {}", ctx.home().join("shared/notes").display());
    ctx.cli()
        .args(["links", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(expected));
}

#[test]
fn add_rejects_nested_link_name() {
    let ctx = TestContext::new();
    ctx.init();

    ctx.cli()
        .args(["links", "add", "/tmp", "a/b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("single path component"));
}
