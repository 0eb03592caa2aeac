/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Module inspection seam. The graph builder only sees `ModuleInspector` and
 * `ExistenceCheck`; the Terraform implementation lives in `terraform`.
 */

mod lexer;
pub mod terraform;

pub use terraform::TerraformInspector;

use crate::error::InspectError;
use std::path::Path;

/// What an inspector learned about one directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleReport {
    /// The directory holds module source files
    pub is_module: bool,
    /// The module declares a backend, making the directory a project root
    pub has_backend: bool,
    /// Relative module sources as authored, in declaration order, unfiltered
    pub dependency_addresses: Vec<String>,
}

impl ModuleReport {
    /// Report for a directory that is not a module at all.
    pub fn not_a_module() -> Self {
        Self::default()
    }
}

/// Tells the graph builder what a directory contains.
pub trait ModuleInspector {
    fn inspect(&self, dir: &Path) -> Result<ModuleReport, InspectError>;
}

/// Decides whether a joined dependency path resolves to something on disk.
pub trait ExistenceCheck {
    fn exists(&self, path: &Path) -> bool;
}

impl<F> ExistenceCheck for F
where
    F: Fn(&Path) -> bool,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}

/// Existence check backed by the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsExistence;

impl ExistenceCheck for FsExistence {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
