use clap::Subcommand;

use crate::app::api;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum LinksCommands {
    /// Create all configured symlinks
    Create,
    /// Record a symlink
    Add {
        /// Path the link points to
        target: String,
        /// Link name inside the link location
        name: String,
    },
    /// List configured symlinks
    #[clap(visible_alias = "ls")]
    List,
}

pub fn run(command: LinksCommands) -> Result<(), AppError> {
    match command {
        LinksCommands::Create => super::finish_batch(api::create_links()?),
        LinksCommands::Add { target, name } => {
            let link = api::add_link(&target, &name)?;
            println!("✅ Added link: {} -> {}", link.name, link.target);
            Ok(())
        }
        LinksCommands::List => {
            let links = api::list_links()?;
            if links.is_empty() {
                println!("No links found.");
            }
            for link in links {
                println!("{} -> {}", link.name, link.target);
            }
            Ok(())
        }
    }
}
