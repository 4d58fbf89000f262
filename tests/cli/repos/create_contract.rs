use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn create_skips_existing_checkouts() {
    let ctx = TestContext::new();
    let checkout = ctx.mkdir("Projects/app");
    ctx.mkdir("Projects/app/.git");
    ctx.write_config(&format!(
        "git_repos:\n- url: https://example.invalid/app.git\n  file_location: {}\n",
        checkout.display()
    ));

    ctx.cli()
        .args(["repos", "create"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already cloned"));
}
