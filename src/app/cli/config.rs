use clap::Subcommand;

use crate::app::api;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Copy the config file to a timestamped backup
    Backup,
    /// Print the config file location
    Path,
}

pub fn run(command: ConfigCommands) -> Result<(), AppError> {
    match command {
        ConfigCommands::Backup => {
            let backup = api::backup_config()?;
            println!("✅ Config backed up to: {}", backup.display());
        }
        ConfigCommands::Path => println!("{}", api::config_path().display()),
    }
    Ok(())
}
