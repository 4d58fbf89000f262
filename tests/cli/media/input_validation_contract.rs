use crate::harness::TestContext;
use assert_fs::prelude::*;
use predicates::prelude::*;

#[test]
fn pdf_compress_missing_input_fails() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["pdf", "compress", "missing.pdf"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Input PDF not found"));
}

#[test]
fn image_resize_dry_run_lists_matching_files() {
    let ctx = TestContext::new();
    let photos = assert_fs::TempDir::new().unwrap();
    photos.child("a.JPG").write_str("a").unwrap();
    photos.child("b.png").write_str("b").unwrap();
    photos.child("notes.txt").write_str("n").unwrap();
    let output = photos.child("resized");

    ctx.cli()
        .args(["image", "resize"])
        .arg(photos.path())
        .arg(output.path())
        .arg("--dry")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("a.JPG")
                .and(predicate::str::contains("b.png"))
                .and(predicate::str::contains("notes.txt").not()),
        );

    output.assert(predicate::path::missing());
}

#[test]
fn toipod_alias_is_accepted() {
    let ctx = TestContext::new();

    ctx.cli().args(["audio", "toipod", "--help"]).assert().success();
}
