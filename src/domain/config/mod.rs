//! Aggregate configuration schema persisted as a single YAML document.

pub mod paths;

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

pub use paths::{CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH, expand_tilde};

pub const DEFAULT_LINK_LOCATION: &str = "~/Links";
pub const DEFAULT_PROJECT_LOCATION: &str = "~/Projects";

/// A symlink `link_location/name -> target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub target: String,
    pub name: String,
}

impl LinkConfig {
    pub fn new(target: impl Into<String>, name: impl Into<String>) -> Result<Self, AppError> {
        let name = name.into();
        validate_single_component("Link name", &name)?;
        Ok(Self { target: target.into(), name })
    }
}

/// A git checkout mirrored by `repos create`.
///
/// Two entries are the same repository when `url` and `checkout_dir()` match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitRepoConfig {
    pub url: String,
    pub file_location: String,
}

impl GitRepoConfig {
    pub fn new(url: impl Into<String>, file_location: impl Into<String>) -> Self {
        Self { url: url.into(), file_location: file_location.into() }
    }

    /// Working tree directory, tilde-expanded.
    ///
    /// Older configs stored the `.git` directory itself; that suffix is dropped.
    pub fn checkout_dir(&self) -> PathBuf {
        let path = expand_tilde(&self.file_location);
        if path.file_name().is_some_and(|name| name == ".git") {
            return path.parent().map(Path::to_path_buf).unwrap_or(path);
        }
        path
    }
}

/// Files whose name contains any keyword move into `sub_folder_name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortingRuleConfig {
    pub sub_folder_name: String,
    #[serde(default)]
    pub contain_list: Vec<String>,
}

impl SortingRuleConfig {
    pub fn new(
        sub_folder_name: impl Into<String>,
        keywords: Vec<String>,
    ) -> Result<Self, AppError> {
        let sub_folder_name = sub_folder_name.into();
        validate_single_component("Sub folder name", &sub_folder_name)?;
        if keywords.is_empty() || keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(AppError::Validation(
                "A sorting rule needs at least one non-empty keyword".to_string(),
            ));
        }
        Ok(Self { sub_folder_name, contain_list: keywords })
    }

    /// Case-insensitive substring match of any keyword against a file name.
    pub fn matches(&self, file_name: &str) -> bool {
        let file_name = file_name.to_lowercase();
        self.contain_list
            .iter()
            .filter(|keyword| !keyword.is_empty())
            .any(|keyword| file_name.contains(&keyword.to_lowercase()))
    }
}

/// Sorting rules for one folder, evaluated in declared order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortFolderConfig {
    pub target_folder: String,
    #[serde(default)]
    pub rules: Vec<SortingRuleConfig>,
}

impl SortFolderConfig {
    pub fn get_target_folder(&self) -> PathBuf {
        expand_tilde(&self.target_folder)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    pub folder_configs: Vec<SortFolderConfig>,
}

/// Root aggregate holding all persisted state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    pub link_location: String,
    pub project_location: String,
    pub project_names: Vec<String>,
    pub project_subdirs: Vec<String>,
    pub links: Vec<LinkConfig>,
    pub git_repos: Vec<GitRepoConfig>,
    pub sort: SortConfig,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            link_location: DEFAULT_LINK_LOCATION.to_string(),
            project_location: DEFAULT_PROJECT_LOCATION.to_string(),
            project_names: Vec::new(),
            project_subdirs: Vec::new(),
            links: Vec::new(),
            git_repos: Vec::new(),
            sort: SortConfig::default(),
        }
    }
}

impl FlowConfig {
    pub fn new(link_location: impl Into<String>, project_location: impl Into<String>) -> Self {
        Self {
            link_location: link_location.into(),
            project_location: project_location.into(),
            ..Self::default()
        }
    }

    pub fn get_project_location(&self) -> PathBuf {
        expand_tilde(&self.project_location)
    }

    pub fn get_link_location(&self) -> PathBuf {
        expand_tilde(&self.link_location)
    }

    /// Append a project name unless it is already listed. Returns `true` if added.
    pub fn add_project(&mut self, name: &str) -> bool {
        if self.project_names.iter().any(|existing| existing == name) {
            return false;
        }
        self.project_names.push(name.to_string());
        true
    }

    /// Append a repository unless the same url is already recorded for its checkout.
    ///
    /// Legacy entries that point at the `.git` directory count as their working tree.
    pub fn add_git_repo(&mut self, repo: GitRepoConfig) -> bool {
        let checkout = repo.checkout_dir();
        let known = self
            .git_repos
            .iter()
            .any(|existing| existing.url == repo.url && existing.checkout_dir() == checkout);
        if known {
            return false;
        }
        self.git_repos.push(repo);
        true
    }

    /// Attach a rule to the folder config whose unexpanded `target_folder`
    /// matches exactly, creating one if none does.
    ///
    /// Returns `true` when a new folder config was created.
    pub fn add_sort_rule(&mut self, target_folder: &str, rule: SortingRuleConfig) -> bool {
        if let Some(folder) =
            self.sort.folder_configs.iter_mut().find(|f| f.target_folder == target_folder)
        {
            folder.rules.push(rule);
            return false;
        }
        self.sort.folder_configs.push(SortFolderConfig {
            target_folder: target_folder.to_string(),
            rules: vec![rule],
        });
        true
    }
}

fn validate_single_component(what: &str, value: &str) -> Result<(), AppError> {
    let mut components = Path::new(value).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(AppError::Validation(format!(
            "{} '{}' must be a single path component",
            what, value
        ))),
    }
}
