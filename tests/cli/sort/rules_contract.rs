use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn add_rule_appends_to_existing_folder_and_lists() {
    let ctx = TestContext::new();
    ctx.init();

    ctx.cli()
        .args(["sort", "add-rule", "~/Downloads", "PDFs", "pdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created sorting config"));
    ctx.cli()
        .args(["sort", "add-rule", "~/Downloads", "Images", "jpg", "png"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created sorting config").not());

    ctx.cli().args(["sort", "list"]).assert().success().stdout(
        predicate::str::contains("Rules for ~/Downloads:")
            .and(predicate::str::contains("  PDFs: pdf"))
            .and(predicate::str::contains("  Images: jpg, png")),
    );
    assert_eq!(ctx.read_config().matches("target_folder").count(), 1);
}

#[test]
fn add_rule_requires_keywords() {
    let ctx = TestContext::new();
    ctx.init();

    ctx.cli().args(["sort", "add-rule", "~/Downloads", "PDFs"]).assert().failure();
}

#[test]
fn list_without_rules_says_so() {
    let ctx = TestContext::new();
    ctx.init();

    ctx.cli()
        .args(["sort", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No sorting rules found."));
}
