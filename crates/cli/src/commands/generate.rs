//! Generate command implementation

use crate::error::CliResult;
use crate::ops::plan::{plan_repository, PlanOptions};
use crate::utils::config::write_config;
use autoplan_planner::render_config;
use tracing::debug;

pub struct Options {
    pub root: Option<String>,
    pub config_file: String,
    pub stdout: bool,
}

pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("✗ Generation failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

fn run_inner(options: &Options) -> CliResult<()> {
    let outcome = plan_repository(&PlanOptions {
        root: options.root.as_deref(),
        config_file: &options.config_file,
    })?;

    if options.stdout {
        print!("{}", render_config(&outcome.planned)?);
        return Ok(());
    }

    write_config(&outcome.config_path, &outcome.planned)?;
    debug!(root = %outcome.root.display(), "regenerated config");

    println!(
        "✓ Updated {} with {} project(s)",
        options.config_file,
        outcome.planned.projects.len()
    );

    Ok(())
}
