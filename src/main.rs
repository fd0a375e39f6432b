mod commands;
mod config;
mod disk;
mod download;
mod error;
mod scrape;
mod setter;

use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use crate::config::Config;

/// potd main parser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Activate debug mode
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch today's photo and set it as the desktop background
    Run,

    /// Print today's photo URL and title without downloading
    Detail,

    /// Set an existing image file as the desktop background
    Set {
        /// Path to the wallpaper image
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red(), e);
            std::process::exit(1);
        }
    };

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => commands::run(&config, cli.debug).await,
        Commands::Detail => commands::detail(&config).await,
        Commands::Set { path } => commands::set(&path),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(e.exit_code());
    }
}
