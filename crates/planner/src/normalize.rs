/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use crate::closure::GLOB_SUFFIX;
use crate::paths::{clean_path, strip_dir_prefix};
use std::collections::HashSet;

/// Turn raw closure paths into project-relative `when_modified` patterns.
///
/// `/repo/project1/../modules/module1/../module2/**/*` becomes
/// `../modules/module2/**/*` for project `/repo/project1`. The project's own
/// `**/*` is always included. The result is unique and sorted ascending.
pub fn clean_paths(paths: &[String], project: &str) -> Vec<String> {
    let relative = paths
        .iter()
        .map(|path| clean_path(strip_dir_prefix(path, project)))
        .chain(std::iter::once(GLOB_SUFFIX.to_string()));

    let mut cleaned = unique(relative);
    cleaned.sort();
    cleaned
}

/// Drop repeated items, keeping the first occurrence of each.
pub fn unique<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
