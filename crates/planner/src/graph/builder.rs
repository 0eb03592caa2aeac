/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use super::{DependencyGraph, Discovery, IgnoreSet};
use crate::error::{PlannerError, WalkError};
use crate::inspector::{ExistenceCheck, ModuleInspector};
use crate::paths::{clean_path, join};
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Walks a module tree once and records projects and path dependencies.
///
/// The root, ignore set, inspector and existence check are all supplied by
/// the caller; nothing is read from the process environment.
pub struct GraphBuilder<'a> {
    inspector: &'a dyn ModuleInspector,
    existence: &'a dyn ExistenceCheck,
    ignore: IgnoreSet,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(inspector: &'a dyn ModuleInspector, existence: &'a dyn ExistenceCheck) -> Self {
        Self {
            inspector,
            existence,
            ignore: IgnoreSet::default(),
        }
    }

    pub fn with_ignore_set(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = ignore;
        self
    }

    /// Pre-order walk of `root`, siblings in file-name order.
    ///
    /// For every directory not pruned by the ignore set:
    /// 1. register it in the graph with no dependencies
    /// 2. ask the inspector about it
    /// 3. if it is a module with a backend, record it as a project
    /// 4. keep each dependency address whose joined path exists, once
    ///
    /// Any walk or inspection error aborts the whole build.
    pub fn build(&self, root: &Path) -> Result<Discovery, PlannerError> {
        if !root.is_dir() {
            return Err(WalkError::MissingRoot(root.to_path_buf()).into());
        }

        let mut discovery = Discovery::default();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                let pruned = entry.file_type().is_dir()
                    && entry
                        .file_name()
                        .to_str()
                        .is_some_and(|name| self.ignore.contains(name));
                if pruned {
                    debug!(dir = %entry.path().display(), "pruned ignored directory");
                }
                !pruned
            });

        for entry in walker {
            let entry = entry.map_err(|e| WalkError::Io {
                path: e.path().unwrap_or(root).to_path_buf(),
                source: e.into(),
            })?;

            if !entry.file_type().is_dir() {
                continue;
            }

            let report = self.inspector.inspect(entry.path())?;

            let Some(dir) = entry.path().to_str().map(str::to_string) else {
                if report.is_module {
                    return Err(WalkError::NonUtf8Path(entry.path().to_path_buf()).into());
                }
                debug!(dir = %entry.path().display(), "skipping non-UTF-8 directory");
                continue;
            };
            discovery.graph.insert_dir(dir.clone());

            if !report.is_module {
                continue;
            }

            if report.has_backend {
                debug!(project = %dir, "discovered project");
                discovery.projects.push(dir.clone());
            }

            for address in report.dependency_addresses {
                let target = clean_path(&join(&dir, &address));
                if !self.existence.exists(Path::new(&target)) {
                    debug!(dir = %dir, address = %address, "skipping dependency that does not exist on disk");
                    continue;
                }
                discovery.graph.add_dependency(&dir, address);
            }
        }

        info!(
            root = %root.display(),
            projects = discovery.projects.len(),
            directories = discovery.graph.len(),
            dependencies = discovery.graph.edge_count(),
            "built dependency graph"
        );

        Ok(discovery)
    }
}
