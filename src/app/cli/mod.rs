//! CLI Adapter.

mod config;
mod init;
mod links;
mod media;
mod projects;
mod repos;
mod sort;

use clap::{Parser, Subcommand};

use crate::domain::{AppError, BatchReport, ItemStatus};

#[derive(Parser)]
#[command(name = "flowutils")]
#[command(version)]
#[command(
    about = "Personal productivity toolbox: projects, links, repos, sorting and media",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new flowutils config
    #[clap(visible_alias = "i")]
    Init {
        /// Folder that holds the managed symlinks
        #[arg(long)]
        link_location: Option<String>,
        /// Folder that holds the project directories
        #[arg(long)]
        project_location: Option<String>,
        /// Record existing project directories
        #[arg(long)]
        capture: bool,
    },
    /// Manage project folders
    #[clap(visible_alias = "p")]
    Projects {
        #[command(subcommand)]
        command: projects::ProjectsCommands,
    },
    /// Manage symlinks
    #[clap(visible_alias = "l")]
    Links {
        #[command(subcommand)]
        command: links::LinksCommands,
    },
    /// Manage git checkouts
    #[clap(visible_alias = "r")]
    Repos {
        #[command(subcommand)]
        command: repos::ReposCommands,
    },
    /// Sort files into sub folders by keyword
    #[clap(visible_alias = "s")]
    Sort {
        #[command(subcommand)]
        command: sort::SortCommands,
    },
    /// Config file maintenance
    Config {
        #[command(subcommand)]
        command: config::ConfigCommands,
    },
    /// Audio conversion and inspection
    Audio {
        #[command(subcommand)]
        command: media::AudioCommands,
    },
    /// Video extraction
    Video {
        #[command(subcommand)]
        command: media::VideoCommands,
    },
    /// PDF tools
    Pdf {
        #[command(subcommand)]
        command: media::PdfCommands,
    },
    /// Image tools
    Image {
        #[command(subcommand)]
        command: media::ImageCommands,
    },
    /// URL helpers
    Url {
        #[command(subcommand)]
        command: media::UrlCommands,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    crate::app::logging::init();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init { link_location, project_location, capture } => {
            init::run_init(link_location, project_location, capture)
        }
        Commands::Projects { command } => projects::run(command),
        Commands::Links { command } => links::run(command),
        Commands::Repos { command } => repos::run(command),
        Commands::Sort { command } => sort::run(command),
        Commands::Config { command } => config::run(command),
        Commands::Audio { command } => media::run_audio(command),
        Commands::Video { command } => media::run_video(command),
        Commands::Pdf { command } => media::run_pdf(command),
        Commands::Image { command } => media::run_image(command),
        Commands::Url { command } => media::run_url(command),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print every item of a batch and fail when any item failed.
fn finish_batch(report: BatchReport) -> Result<(), AppError> {
    print_items(&report);
    report.into_result()
}

fn print_items(report: &BatchReport) {
    for item in &report.items {
        match &item.status {
            ItemStatus::Done => println!("✅ {}", item.label),
            ItemStatus::Skipped(reason) => println!("ℹ️  {} ({})", item.label, reason),
            ItemStatus::Failed(reason) => println!("❌ {}: {}", item.label, reason),
        }
    }
}

fn print_panel(title: &str, lines: &[String]) {
    println!("=== {} ===", title);
    for line in lines {
        println!("  {}", line);
    }
}
