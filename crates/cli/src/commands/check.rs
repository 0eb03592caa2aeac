//! Check command implementation
//!
//! Fails when the committed config file's projects differ from what
//! `generate` would write, so CI can catch a stale file.

use crate::error::{CliError, CliResult};
use crate::ops::plan::{plan_repository, PlanOptions};
use autoplan_planner::ProjectConfig;

pub struct Options {
    pub root: Option<String>,
    pub config_file: String,
}

/// Per-project differences between two project lists, keyed by name
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ProjectDrift {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub changed: Vec<String>,
}

impl ProjectDrift {
    pub fn between(current: &[ProjectConfig], planned: &[ProjectConfig]) -> Self {
        let find = |projects: &[ProjectConfig], name: &str| {
            projects.iter().find(|p| p.name == name).cloned()
        };

        let mut drift = Self::default();
        for project in planned {
            match find(current, &project.name) {
                None => drift.added.push(project.name.clone()),
                Some(existing) if existing != *project => drift.changed.push(project.name.clone()),
                Some(_) => {}
            }
        }
        for project in current {
            if find(planned, &project.name).is_none() {
                drift.removed.push(project.name.clone());
            }
        }
        drift
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    fn print(&self) {
        for name in &self.added {
            println!("  + {name}");
        }
        for name in &self.removed {
            println!("  - {name}");
        }
        for name in &self.changed {
            println!("  ~ {name}");
        }
    }
}

pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("✗ Check failed");
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

    if outcome.is_up_to_date() {
        println!(
            "✓ {} is up to date ({} project(s))",
            options.config_file,
            outcome.planned.projects.len()
        );
        return Ok(());
    }

    let drift = ProjectDrift::between(&outcome.current.projects, &outcome.planned.projects);
    if drift.is_empty() {
        // Same projects, different order
        println!("Project order differs from discovery order");
    } else {
        drift.print();
    }

    Err(CliError::Message(format!(
        "{} is out of date. Run 'autoplan generate' to update it.",
        options.config_file
    )))
}
