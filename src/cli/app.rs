//! Main CLI application structure

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{config_cmd, recipe};
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "recipes")]
#[command(author, version, about = "Keep recipes in a plain sectioned text file")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Recipe file (defaults to the configured one, then recipes.txt)
    #[arg(long, short = 'F', global = true, env = "RECIPES_FILE")]
    pub file: Option<PathBuf>,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true, env = "RECIPES_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format (defaults to the configured one)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List recipes with their index
    List,

    /// Show one recipe, or all of them
    Show {
        /// Zero-based recipe index (omit to show every recipe)
        index: Option<usize>,

        /// Wait for Enter between recipes
        #[arg(long)]
        pause: bool,
    },

    /// Delete a recipe and save the file
    Delete {
        /// Zero-based recipe index
        index: usize,
    },

    /// Check that the recipe file is well-formed
    Check,

    /// Rewrite the recipe file sorted by name
    Sort,

    /// Show the effective configuration
    Config,
}

/// Installs the `log` backend; `RECIPES_LOG` overrides the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::new().filter_or("RECIPES_LOG", default_level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load()?,
    };

    let format = cli
        .format
        .unwrap_or_else(|| config.default_format.into());
    let output = Output::new(format, cli.verbose);

    let file = config.resolve_recipes_file(cli.file.as_deref());
    output.verbose(&format!("Using recipe file: {}", file.display()));

    match cli.command {
        Commands::List => recipe::list(&output, &file)?,
        Commands::Show { index, pause } => {
            recipe::show(&output, &file, index, pause || config.pause_between_recipes)?
        }
        Commands::Delete { index } => recipe::delete(&output, &file, index)?,
        Commands::Check => recipe::check(&output, &file)?,
        Commands::Sort => recipe::sort(&output, &file)?,
        Commands::Config => config_cmd::show(&output, &config, cli.config.as_deref(), &file)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
