//! Main CLI application structure

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use super::output::{Output, OutputFormat};
use super::script;

#[derive(Parser)]
#[command(name = "shiftman")]
#[command(author, version, about = "Weekly staff roster management for a single shop")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute a roster command script (reads stdin when no file given)
    Run {
        /// Path to the script file
        script: Option<PathBuf>,
    },

    /// Run the built-in walkthrough scenario
    Demo,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    match cli.command {
        Commands::Run { script } => match script {
            Some(path) => {
                output.verbose(&format!("Running script: {}", path.display()));
                let file = File::open(&path)
                    .with_context(|| format!("failed to open script {}", path.display()))?;
                script::run_reader(BufReader::new(file), &output, false)
            }
            None => {
                output.verbose("Reading script from stdin");
                script::run_reader(std::io::stdin().lock(), &output, false)
            }
        },

        Commands::Demo => {
            output.verbose("Running built-in demo scenario");
            script::demo(&output)
        }
    }
}
