/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Dependency graph over module directories.
 */

mod builder;
mod ignore;

pub use builder::GraphBuilder;
pub use ignore::{IgnoreSet, DEFAULT_IGNORED_DIRS};

use std::collections::BTreeMap;

/// Directory path → relative dependency addresses, in discovery order.
///
/// Keys are absolute, lexically clean directory paths. Every walked directory
/// has an entry, possibly empty. Read-only once the builder returns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: BTreeMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a directory with no dependencies yet.
    pub fn insert_dir(&mut self, dir: impl Into<String>) {
        self.edges.entry(dir.into()).or_default();
    }

    /// Appends `address` to `dir`'s dependencies unless already present.
    ///
    /// Returns whether the address was added.
    pub fn add_dependency(&mut self, dir: &str, address: impl Into<String>) -> bool {
        let address = address.into();
        let deps = self.edges.entry(dir.to_string()).or_default();
        if deps.contains(&address) {
            return false;
        }
        deps.push(address);
        true
    }

    /// Dependencies of `dir`; empty for unknown directories.
    pub fn dependencies(&self, dir: &str) -> &[String] {
        self.edges.get(dir).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains_dir(&self, dir: &str) -> bool {
        self.edges.contains_key(dir)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of dependency edges across all directories.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.edges
            .iter()
            .map(|(dir, deps)| (dir.as_str(), deps.as_slice()))
    }
}

impl<K, V, A> FromIterator<(K, V)> for DependencyGraph
where
    K: Into<String>,
    V: IntoIterator<Item = A>,
    A: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut graph = Self::new();
        for (dir, deps) in iter {
            let dir = dir.into();
            graph.insert_dir(dir.clone());
            for dep in deps {
                graph.add_dependency(&dir, dep);
            }
        }
        graph
    }
}

/// Result of walking a module tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Discovery {
    /// Project directories in walk order
    pub projects: Vec<String>,
    pub graph: DependencyGraph,
}
