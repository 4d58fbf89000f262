use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn init_leaves_existing_config_untouched() {
    let ctx = TestContext::new();
    ctx.write_config("link_location: /keep/links\nproject_names:\n- keep\n");
    let before = ctx.config_hash();

    ctx.cli()
        .args(["init", "--link-location", "/other"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(ctx.config_hash(), before);
}
