/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Transitive closure of a project's path dependencies.
 */

use crate::error::ResolveError;
use crate::graph::DependencyGraph;
use crate::paths::{clean_path, join};
use tracing::trace;

/// Suffix that turns a directory into "everything beneath it".
pub const GLOB_SUFFIX: &str = "**/*";

/// List the glob paths reachable from `project`, depth first.
///
/// The returned paths are deliberately not cleaned: each one is the project
/// path followed by the literal chain of addresses that reached it, e.g.
/// `/repo/project1/../modules/module1/../module2/**/*`. Only graph lookups use
/// the cleaned form. The normalizer relies on the untouched project prefix.
///
/// The same module reached through two branches is emitted twice. Re-entering
/// a directory that is already on the current chain is a cycle and fails.
/// Shared modules are re-expanded on every branch, so layered graphs with many
/// diamonds grow exponentially here before the normalizer collapses them.
pub fn when_modified_paths(
    project: &str,
    graph: &DependencyGraph,
) -> Result<Vec<String>, ResolveError> {
    let mut paths = Vec::new();
    let mut chain = Vec::new();
    expand(project, graph, &mut chain, &mut paths)?;
    Ok(paths)
}

fn expand(
    path: &str,
    graph: &DependencyGraph,
    chain: &mut Vec<String>,
    paths: &mut Vec<String>,
) -> Result<(), ResolveError> {
    let key = clean_path(path);

    if let Some(start) = chain.iter().position(|seen| *seen == key) {
        let mut cycle = chain[start..].to_vec();
        cycle.push(key);
        return Err(ResolveError::Cycle { chain: cycle });
    }

    let deps = graph.dependencies(&key);
    chain.push(key);

    for dep in deps {
        let next = join(path, dep);
        trace!(from = %path, dep = %dep, "expanding dependency");
        paths.push(join(&next, GLOB_SUFFIX));
        expand(&next, graph, chain, paths)?;
    }

    chain.pop();
    Ok(())
}
