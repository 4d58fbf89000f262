use flowutils::api::{self, AddProjectOutcome, AppError, FolderRun, InitOptions};
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

struct FlowConfigGuard {
    original: Option<std::ffi::OsString>,
}

impl FlowConfigGuard {
    fn point_at(path: &Path) -> Self {
        let original = std::env::var_os("FLOW_CONFIG");
        unsafe { std::env::set_var("FLOW_CONFIG", path) };
        Self { original }
    }
}

impl Drop for FlowConfigGuard {
    fn drop(&mut self) {
        if let Some(original) = self.original.as_ref() {
            unsafe { std::env::set_var("FLOW_CONFIG", original) };
        } else {
            unsafe { std::env::remove_var("FLOW_CONFIG") };
        }
    }
}

#[test]
#[serial]
fn public_api_config_lifecycle_contract() {
    let temp = TempDir::new().unwrap();
    let root = temp.path();
    let config_path = root.join("conf").join("config.yaml");
    let _guard = FlowConfigGuard::point_at(&config_path);

    fs::create_dir_all(root.join("Projects/existing")).unwrap();
    let outcome = api::init(InitOptions {
        link_location: root.join("Links").to_string_lossy().into_owned(),
        project_location: root.join("Projects").to_string_lossy().into_owned(),
        capture: true,
    })
    .expect("init failed");
    assert_eq!(outcome.config_path, config_path);
    assert_eq!(outcome.captured_projects, 1);
    assert!(matches!(api::init(InitOptions::default()), Err(AppError::ConfigExists(_))));

    assert_eq!(api::add_project("fresh").unwrap(), AddProjectOutcome::Added);
    assert_eq!(api::list_projects().unwrap(), vec!["existing".to_string(), "fresh".to_string()]);

    let downloads = root.join("Downloads");
    fs::create_dir_all(&downloads).unwrap();
    fs::write(downloads.join("invoice-2024.pdf"), "x").unwrap();
    let folder = downloads.to_string_lossy().into_owned();
    assert!(api::add_sort_rule(&folder, "Invoices", vec!["invoice".into()]).unwrap());

    let runs = api::run_sort(false).unwrap();
    assert!(matches!(&runs[0], FolderRun::Sorted { report, .. } if report.count_done() == 1));
    assert!(downloads.join("Invoices/invoice-2024.pdf").is_file());

    let backup = api::backup_config().unwrap();
    assert_eq!(fs::read(&backup).unwrap(), fs::read(&config_path).unwrap());
}

#[test]
#[serial]
fn public_api_reports_missing_config() {
    let temp = TempDir::new().unwrap();
    let _guard = FlowConfigGuard::point_at(&temp.path().join("absent.yaml"));

    assert!(!api::config_exists());
    assert!(matches!(api::list_links(), Err(AppError::ConfigNotFound(_))));
}

#[test]
fn forklift_link_is_pure() {
    assert_eq!(api::forklift_link("/a b/c"), "openforklift:///a%20b/c");
}
