use clap::Subcommand;

use crate::app::api::{self, AddProjectOutcome};
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum ProjectsCommands {
    /// List configured project names
    #[clap(visible_alias = "ls")]
    List,
    /// Replace the project list with the existing project directories
    Capture,
    /// Create every project sub directory
    Create,
    /// Add a project name
    Add {
        /// Project name
        name: String,
    },
}

pub fn run(command: ProjectsCommands) -> Result<(), AppError> {
    match command {
        ProjectsCommands::List => {
            let names = api::list_projects()?;
            if names.is_empty() {
                println!("No projects found.");
            } else {
                super::print_panel("Projects", &names);
            }
            Ok(())
        }
        ProjectsCommands::Capture => {
            let names = api::capture_projects()?;
            println!("✅ Captured {} project(s)", names.len());
            for name in &names {
                println!("  • {}", name);
            }
            Ok(())
        }
        ProjectsCommands::Create => super::finish_batch(api::create_projects()?),
        ProjectsCommands::Add { name } => {
            match api::add_project(&name)? {
                AddProjectOutcome::Added => println!("✅ Added project: {}", name),
                AddProjectOutcome::AlreadyExists => {
                    println!("ℹ️  Project '{}' already exists", name)
                }
            }
            Ok(())
        }
    }
}
