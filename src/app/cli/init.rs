//! Init command implementation.

use std::io::{ErrorKind, IsTerminal};

use dialoguer::{Confirm, Error as DialoguerError, Input};

use crate::app::api::{self, InitOptions};
use crate::domain::AppError;

pub fn run_init(
    link_location: Option<String>,
    project_location: Option<String>,
    capture: bool,
) -> Result<(), AppError> {
    if api::config_exists() {
        return Err(AppError::ConfigExists(api::config_path()));
    }

    let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    let defaults = InitOptions::default();
    let options = if interactive {
        let prompt_capture = link_location.is_none() && project_location.is_none() && !capture;
        InitOptions {
            link_location: match link_location {
                Some(value) => value,
                None => prompt_text("Link location", &defaults.link_location)?,
            },
            project_location: match project_location {
                Some(value) => value,
                None => prompt_text("Project location", &defaults.project_location)?,
            },
            capture: capture || (prompt_capture && prompt_confirm("Capture existing projects?")?),
        }
    } else {
        InitOptions {
            link_location: link_location.unwrap_or(defaults.link_location),
            project_location: project_location.unwrap_or(defaults.project_location),
            capture,
        }
    };

    let outcome = api::init(options)?;
    println!("✅ Created config file at: {}", outcome.config_path.display());
    if outcome.captured_projects > 0 {
        println!("  Captured {} project(s)", outcome.captured_projects);
    }
    Ok(())
}

fn prompt_text(prompt: &str, default: &str) -> Result<String, AppError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()
        .map_err(|err| prompt_error(prompt, err))
}

fn prompt_confirm(prompt: &str) -> Result<bool, AppError> {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|err| prompt_error(prompt, err))
}

fn prompt_error(prompt: &str, err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted => {
            AppError::Validation("Init cancelled".to_string())
        }
        err => AppError::Validation(format!("Failed to read '{}': {}", prompt, err)),
    }
}
