use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[cfg(unix)]
#[test]
fn create_makes_remaining_links_when_one_conflicts() {
    let ctx = TestContext::new();
    let target = ctx.mkdir("Targets/docs");
    ctx.mkdir("Links/taken");
    ctx.write_config(&format!(
        "link_location: {links}
links:
- target: {target}
  name: taken
- target: {target}
  name: fresh
",
        links = ctx.home().join("Links").display(),
        target = target.display(),
    ));

    ctx.cli()
        .args(["links", "create"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("fresh"))
        .stderr(predicate::str::contains("1 of 2 item(s) failed"));

    assert_eq!(fs::read_link(ctx.home().join("Links/fresh")).unwrap(), target);
    assert!(ctx.home().join("Links/taken").is_dir());
}

#[test]
fn list_without_links_says_so() {
    let ctx = TestContext::new();
    ctx.init();

    ctx.cli()
        .args(["links", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No links found."));
}
