//! Shell completion command implementation

use crate::error::{CliError, CliResult};
use crate::get_cli_command;
use clap_complete::{generate, Shell};
use std::io;

pub struct Options {
    pub shell: String,
}

/// Generate shell completion script
pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("✗ Completion generation failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

fn parse_shell(name: &str) -> CliResult<Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        "" => Err(CliError::Message(
            "Shell name is required. Supported shells: bash, zsh, fish".to_string(),
        )),
        _ => Err(CliError::Message(format!(
            "Unsupported shell: {name}. Supported shells: bash, zsh, fish"
        ))),
    }
}

fn run_inner(options: &Options) -> CliResult<()> {
    let shell = parse_shell(&options.shell)?;
    let mut cmd = get_cli_command();
    generate(shell, &mut cmd, "autoplan", &mut io::stdout());
    Ok(())
}
