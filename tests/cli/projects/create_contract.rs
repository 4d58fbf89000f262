use crate::harness::TestContext;

#[test]
fn create_builds_every_project_subdir() {
    let ctx = TestContext::new();
    let projects = ctx.home().join("Projects");
    ctx.write_config(&format!(
        "project_location: {}\nproject_names: [alpha, beta]\nproject_subdirs: [docs, src]\n",
        projects.display()
    ));

    ctx.cli().args(["projects", "create"]).assert().success();
    ctx.cli().args(["projects", "create"]).assert().success();

    for name in ["alpha", "beta"] {
        for sub in ["docs", "src"] {
            assert!(projects.join(name).join(sub).is_dir(), "{}/{} missing", name, sub);
        }
    }
}

#[test]
fn capture_replaces_project_names() {
    let ctx = TestContext::new();
    ctx.mkdir("Projects/one");
    ctx.mkdir("Projects/two");
    ctx.write_config(&format!(
        "project_location: {}\nproject_names: [stale]\n",
        ctx.home().join("Projects").display()
    ));

    ctx.cli().args(["projects", "capture"]).assert().success();

    let content = ctx.read_config();
    assert!(content.contains("- one"));
    assert!(content.contains("- two"));
    assert!(!content.contains("stale"));
}
