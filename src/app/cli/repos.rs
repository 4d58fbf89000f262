use clap::Subcommand;

use crate::app::api;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum ReposCommands {
    /// Record git checkouts found under the project location
    Collect,
    /// List recorded repositories
    #[clap(visible_alias = "ls")]
    List,
    /// Clone recorded repositories that are not checked out
    Create,
}

pub fn run(command: ReposCommands) -> Result<(), AppError> {
    match command {
        ReposCommands::Collect => {
            let outcome = api::collect_repos()?;
            println!(
                "✅ Found {} repositories, added {} (total {})",
                outcome.found, outcome.added, outcome.total
            );
            Ok(())
        }
        ReposCommands::List => {
            let repos = api::list_repos()?;
            if repos.is_empty() {
                println!("No Git repositories found.");
            }
            for repo in repos {
                println!("{} -> {}", repo.file_location, repo.url);
            }
            Ok(())
        }
        ReposCommands::Create => super::finish_batch(api::create_repos()?),
    }
}
