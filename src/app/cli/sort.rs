use clap::Subcommand;

use crate::app::api::{self, FolderRun};
use crate::domain::{AppError, BatchReport};

#[derive(Subcommand)]
pub enum SortCommands {
    /// Sort every configured folder
    Run {
        /// Show planned moves without moving anything
        #[arg(short = 'd', long = "dry")]
        dry: bool,
    },
    /// Add a sorting rule
    AddRule {
        /// Folder to sort, as written in the config
        target_folder: String,
        /// Sub folder receiving matching files
        sub_folder: String,
        /// Case-insensitive keywords matched against file names
        #[arg(required = true)]
        keywords: Vec<String>,
    },
    /// List sorting rules
    #[clap(visible_alias = "ls")]
    List,
}

pub fn run(command: SortCommands) -> Result<(), AppError> {
    match command {
        SortCommands::Run { dry } => {
            let runs = api::run_sort(dry)?;
            if runs.is_empty() {
                println!("No sorting rules found.");
                return Ok(());
            }
            if dry {
                println!("ℹ️  Dry run: no files are moved");
            }
            let mut combined = BatchReport::new();
            for run in runs {
                match run {
                    FolderRun::Missing { folder } => {
                        println!("⚠️  Folder does not exist: {}", folder.display())
                    }
                    FolderRun::Failed { folder, error } => {
                        combined.failed(format!("Sorting {}", folder.display()), error);
                    }
                    FolderRun::Sorted { folder, report } => {
                        println!("Sorting {}", folder.display());
                        if report.is_empty() {
                            println!("  Nothing to sort");
                        }
                        combined.extend(report);
                    }
                }
            }
            super::finish_batch(combined)
        }
        SortCommands::AddRule { target_folder, sub_folder, keywords } => {
            let created = api::add_sort_rule(&target_folder, &sub_folder, keywords)?;
            if created {
                println!("✅ Created sorting config for {}", target_folder);
            }
            println!("✅ Added rule: {} -> {}", target_folder, sub_folder);
            Ok(())
        }
        SortCommands::List => {
            let folders = api::list_sort_rules()?;
            if folders.is_empty() {
                println!("No sorting rules found.");
            }
            for folder in folders {
                println!("Rules for {}:", folder.target_folder);
                for rule in folder.rules {
                    println!("  {}: {}", rule.sub_folder_name, rule.contain_list.join(", "));
                }
            }
            Ok(())
        }
    }
}
