use crate::harness::TestContext;
use predicates::prelude::*;

fn sort_config(ctx: &TestContext) -> String {
    format!(
        "sort:
  folder_configs:
  - target_folder: {}
    rules:
    - sub_folder_name: Reports
      contain_list: [report]
    - sub_folder_name: PDFs
      contain_list: [pdf]
",
        ctx.home().join("Downloads").display()
    )
}

#[test]
fn run_moves_files_by_first_matching_rule() {
    let ctx = TestContext::new();
    ctx.write_file("Downloads/report.pdf", "r");
    ctx.write_file("Downloads/manual.PDF", "m");
    ctx.write_file("Downloads/photo.jpg", "p");
    ctx.write_config(&sort_config(&ctx));

    ctx.cli().args(["sort", "run"]).assert().success();

    let downloads = ctx.home().join("Downloads");
    assert!(downloads.join("Reports/report.pdf").is_file());
    assert!(downloads.join("PDFs/manual.PDF").is_file());
    assert!(downloads.join("photo.jpg").is_file());
}

#[test]
fn dry_run_changes_nothing() {
    let ctx = TestContext::new();
    ctx.write_file("Downloads/report.pdf", "r");
    ctx.write_config(&sort_config(&ctx));

    ctx.cli()
        .args(["sort", "run", "--dry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("report.pdf -> Reports").count(1));

    assert!(ctx.home().join("Downloads/report.pdf").is_file());
    assert!(!ctx.home().join("Downloads/Reports").exists());
}

#[test]
fn missing_folder_is_reported_and_skipped() {
    let ctx = TestContext::new();
    ctx.write_config(&sort_config(&ctx));

    ctx.cli()
        .args(["sort", "run", "-d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Folder does not exist"));
}
