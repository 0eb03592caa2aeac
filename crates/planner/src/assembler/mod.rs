/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Per-project configuration records and their merge into the document.
 */

use crate::closure::when_modified_paths;
use crate::error::ResolveError;
use crate::graph::DependencyGraph;
use crate::normalize::clean_paths;
use crate::paths::strip_dir_prefix;
use crate::schema::{AtlantisConfig, ProjectConfig};
use rayon::prelude::*;
use tracing::{debug, info};

/// Project path relative to `root`; a project at the root itself is `"."`.
pub fn relative_name(root: &str, project: &str) -> String {
    if project == root {
        return ".".to_string();
    }
    strip_dir_prefix(project, root).to_string()
}

/// Build the configuration record for a single project.
pub fn make_project_config(
    root: &str,
    project: &str,
    graph: &DependencyGraph,
) -> Result<ProjectConfig, ResolveError> {
    let raw = when_modified_paths(project, graph)?;
    let patterns = clean_paths(&raw, project);
    let name = relative_name(root, project);

    debug!(project = %name, patterns = patterns.len(), "assembled project config");
    Ok(ProjectConfig::new(name, patterns))
}

/// Replace `config.projects` with freshly built records, one per project.
///
/// Projects are built in parallel. Each result lands in the slot matching the
/// project's index, so the output order is the order of `projects` whatever
/// order the work finishes in. Any resolution error fails the whole merge.
pub fn add_projects_to_config(
    mut config: AtlantisConfig,
    root: &str,
    projects: &[String],
    graph: &DependencyGraph,
) -> Result<AtlantisConfig, ResolveError> {
    let mut slots: Vec<Result<ProjectConfig, ResolveError>> = Vec::with_capacity(projects.len());
    projects
        .par_iter()
        .map(|project| make_project_config(root, project, graph))
        .collect_into_vec(&mut slots);

    config.projects = slots.into_iter().collect::<Result<Vec<_>, _>>()?;

    info!(projects = config.projects.len(), "merged project configs");
    Ok(config)
}
