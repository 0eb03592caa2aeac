/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the planner
#[derive(Error, Debug)]
pub enum PlannerError {
    #[error("Walk error: {0}")]
    Walk(#[from] WalkError),

    #[error("Inspection error: {0}")]
    Inspect(#[from] InspectError),

    #[error("Resolution error: {0}")]
    Resolve(#[from] ResolveError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
}

/// Errors raised while traversing the module tree
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("Root directory not found: {}", .0.display())]
    MissingRoot(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}

/// Errors raised by a module inspector for a single directory
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Syntax error in {} at line {line}: {message}", path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Invalid JSON in {}: {message}", path.display())]
    InvalidJson { path: PathBuf, message: String },

    #[error("Duplicate module call \"{name}\" in {}", dir.display())]
    DuplicateModuleCall { dir: PathBuf, name: String },
}

/// Errors raised while expanding a project's dependency closure
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Dependency cycle detected: {}", chain.join(" -> "))]
    Cycle { chain: Vec<String> },
}

/// Errors raised while reading or rendering the configuration document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Invalid YAML: {0}")]
    InvalidYaml(String),

    #[error("Failed to render YAML: {0}")]
    Render(String),
}
