//! Autoplan CLI
//!
//! Copyright 2025 Release Workshop Ltd
//! Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
//! See the LICENSE file in the project root for details.

mod commands;
mod error;
mod ops;
mod utils;

#[cfg(test)]
mod test_helpers;

use clap::{CommandFactory, Parser, Subcommand};
use commands::{check, completion, generate, graph};
use tracing_subscriber::EnvFilter;
use utils::config::DEFAULT_CONFIG_FILE;

/// Autoplan CLI - Regenerate Atlantis autoplan projects from Terraform module dependencies
#[derive(Parser)]
#[command(name = "autoplan")]
#[command(
    about = "Autoplan CLI - Regenerate Atlantis autoplan projects from Terraform module dependencies",
    long_about = None
)]
#[command(version = env!("AUTOPLAN_VERSION"))]
struct Cli {
    /// Enable debug logging (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate the projects list of the config file
    Generate {
        /// Repository root to scan (defaults to the current directory)
        #[arg(long, env = "DIR")]
        root: Option<String>,
        /// Config file name, relative to the root
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config_file: String,
        /// Print the generated document instead of writing it
        #[arg(long)]
        stdout: bool,
    },
    /// Exit non-zero if the config file's projects are out of date
    Check {
        /// Repository root to scan (defaults to the current directory)
        #[arg(long, env = "DIR")]
        root: Option<String>,
        /// Config file name, relative to the root
        #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
        config_file: String,
    },
    /// Show discovered projects and the module dependency graph
    Graph {
        /// Repository root to scan (defaults to the current directory)
        #[arg(long, env = "DIR")]
        root: Option<String>,
        /// Output format (text, yaml)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Generate shell completion script
    Completion {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}

/// Clap command tree, shared with the completion generator
pub fn get_cli_command() -> clap::Command {
    Cli::command()
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Commands::Generate {
            root,
            config_file,
            stdout,
        } => {
            let opts = generate::Options {
                root,
                config_file,
                stdout,
            };
            generate::run(&opts)
        }
        Commands::Check { root, config_file } => {
            let opts = check::Options { root, config_file };
            check::run(&opts)
        }
        Commands::Graph { root, format } => {
            let opts = graph::Options { root, format };
            graph::run(&opts)
        }
        Commands::Completion { shell } => {
            let opts = completion::Options { shell };
            completion::run(&opts)
        }
    };

    std::process::exit(exit_code);
}
