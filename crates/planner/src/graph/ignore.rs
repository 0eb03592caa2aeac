/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use std::collections::BTreeSet;

/// Directory names whose whole subtree is skipped during the walk:
/// VCS metadata, CI metadata and the local provider/module cache.
pub const DEFAULT_IGNORED_DIRS: &[&str] = &[".circleci", ".git", ".github", ".terraform"];

/// Set of directory names pruned from the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreSet {
    names: BTreeSet<String>,
}

impl IgnoreSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Matches a single directory name, not a path.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for IgnoreSet {
    fn default() -> Self {
        Self::new(DEFAULT_IGNORED_DIRS.iter().copied())
    }
}
