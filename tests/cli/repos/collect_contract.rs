use crate::harness::TestContext;
use git2::Repository;
use predicates::prelude::*;

#[test]
fn collect_records_origin_remotes_once() {
    let ctx = TestContext::new();
    let app = ctx.mkdir("Projects/app");
    let repo = Repository::init(&app).unwrap();
    repo.remote("origin", "https://example.com/owner/app.git").unwrap();
    Repository::init(ctx.mkdir("Projects/no-remote")).unwrap();
    ctx.init();

    ctx.cli()
        .args(["repos", "collect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 1 repositories, added 1 (total 1)"));
    ctx.cli()
        .args(["repos", "collect"])
        .assert()
        .success()
        .stdout(predicate::str::contains("added 0 (total 1)"));

    ctx.cli()
        .args(["repos", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://example.com/owner/app.git"));
}

#[test]
fn list_without_repos_says_so() {
    let ctx = TestContext::new();
    ctx.init();

    ctx.cli()
        .args(["repos", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No Git repositories found."));
}
