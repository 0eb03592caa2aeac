//! Autoplan Planner Library
//!
//! Copyright 2025 Release Workshop Ltd
//! Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
//! See the LICENSE file in the project root for details.
//!
//! This library infers, from a tree of Terraform module directories, which
//! directories are independently deployable projects, and computes for each
//! one the `when_modified` globs covering the project and every local module
//! it depends on, directly or transitively.
//!
//! The pipeline runs strictly forward:
//!
//! 1. [`GraphBuilder`] walks the tree once, asking a [`ModuleInspector`] about
//!    every directory, and returns the projects plus a [`DependencyGraph`].
//! 2. For each project, in parallel, [`closure::when_modified_paths`] expands
//!    the graph and [`normalize::clean_paths`] rewrites the result into sorted,
//!    project-relative patterns.
//! 3. [`assembler::add_projects_to_config`] replaces the document's
//!    `projects` list, in discovery order.
//!
//! # Example
//!
//! ```rust,no_run
//! use autoplan_planner::{parse_config, plan, render_config, TerraformInspector};
//! use std::path::Path;
//!
//! let base = parse_config("version: 3\nparallel_plan: true\n")?;
//! let config = plan(base, Path::new("/repo"), &TerraformInspector)?;
//! println!("{}", render_config(&config)?);
//! # Ok::<(), autoplan_planner::PlannerError>(())
//! ```

pub mod assembler;
pub mod closure;
pub mod error;
pub mod graph;
pub mod inspector;
pub mod normalize;
pub mod paths;
pub mod schema;

#[cfg(test)]
mod test_fixtures;

use std::path::Path;

pub use error::{DocumentError, InspectError, PlannerError, ResolveError, WalkError};
pub use graph::{DependencyGraph, Discovery, GraphBuilder, IgnoreSet, DEFAULT_IGNORED_DIRS};
pub use inspector::{ExistenceCheck, FsExistence, ModuleInspector, ModuleReport, TerraformInspector};
pub use schema::{parse_config, render_config, AtlantisConfig, AutoplanConfig, ProjectConfig};

/// Walk `root` with the default ignore set and a filesystem existence check.
///
/// `root` should be absolute and clean; discovered paths are built on it verbatim.
pub fn discover(root: &Path, inspector: &dyn ModuleInspector) -> Result<Discovery, PlannerError> {
    GraphBuilder::new(inspector, &FsExistence).build(root)
}

/// Run the whole pipeline and return `base` with its projects regenerated.
///
/// Nothing is written; persisting the result is the caller's job.
pub fn plan(
    base: AtlantisConfig,
    root: &Path,
    inspector: &dyn ModuleInspector,
) -> Result<AtlantisConfig, PlannerError> {
    let root = root
        .to_str()
        .map(paths::clean_path)
        .ok_or_else(|| WalkError::NonUtf8Path(root.to_path_buf()))?;

    let discovery = discover(Path::new(&root), inspector)?;
    let config =
        assembler::add_projects_to_config(base, &root, &discovery.projects, &discovery.graph)?;
    Ok(config)
}
