//! Plan a repository against its config file

use crate::error::CliResult;
use crate::utils::config::{config_path, read_config};
use crate::utils::workspace::resolve_root;
use autoplan_planner::{plan, AtlantisConfig, TerraformInspector};
use std::path::PathBuf;
use tracing::info;

/// Options for planning a repository
pub struct PlanOptions<'a> {
    /// Repository root as given by the user; `None` means the current directory
    pub root: Option<&'a str>,
    /// Config file name relative to the root
    pub config_file: &'a str,
}

/// The config file as found on disk and as it should be
#[derive(Debug)]
pub struct PlanOutcome {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub current: AtlantisConfig,
    pub planned: AtlantisConfig,
}

impl PlanOutcome {
    /// True if the file's projects already match the generated ones
    pub fn is_up_to_date(&self) -> bool {
        self.current.projects == self.planned.projects
    }
}

/// Resolve the root, read its config file and regenerate the projects.
///
/// Nothing is written.
pub fn plan_repository(options: &PlanOptions<'_>) -> CliResult<PlanOutcome> {
    let root = resolve_root(options.root)?;
    let config_path = config_path(&root, options.config_file);
    let current = read_config(&config_path)?;

    let planned = plan(current.clone(), &root, &TerraformInspector)?;
    info!(
        root = %root.display(),
        projects = planned.projects.len(),
        "planned repository"
    );

    Ok(PlanOutcome {
        root,
        config_path,
        current,
        planned,
    })
}
