/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Lexical path helpers. Paths are `/`-separated strings; nothing here touches
 * the filesystem.
 */

/// Lexically clean a path.
///
/// Collapses repeated separators, `.` segments and `..` segments that follow a
/// real segment. A `..` at the start of a rooted path is dropped, a `..` at the
/// start of a relative path is kept. An empty result becomes `"."`.
///
/// Glob segments such as `**` and `*` are ordinary segments.
pub fn clean_path(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Remove exactly one leading occurrence of `prefix + "/"` from `path`.
///
/// Returns `path` unchanged when it does not start with that prefix.
pub fn strip_dir_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    path.strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or(path)
}

/// Join a directory and a relative address with a single `/`, without cleaning.
pub fn join(dir: &str, address: &str) -> String {
    format!("{dir}/{address}")
}
