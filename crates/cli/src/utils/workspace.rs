//! Repository root resolution
//!
//! The root comes from `--root`, or the `DIR` environment variable that the
//! Atlantis pre-workflow hook exports, or the current directory.

use crate::error::{CliError, CliResult};
use autoplan_planner::paths::clean_path;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the repository root to an absolute, lexically clean directory.
pub fn resolve_root(root: Option<&str>) -> CliResult<PathBuf> {
    let candidate = match root.filter(|r| !r.is_empty()) {
        Some(root) => PathBuf::from(root),
        None => env::current_dir()?,
    };

    let absolute = if candidate.is_absolute() {
        candidate
    } else {
        env::current_dir()?.join(candidate)
    };

    let cleaned = absolute
        .to_str()
        .map(clean_path)
        .map(PathBuf::from)
        .ok_or_else(|| {
            CliError::Message(format!(
                "Root path is not valid UTF-8: {}",
                absolute.display()
            ))
        })?;

    ensure_directory(&cleaned)?;
    debug!(root = %cleaned.display(), "resolved repository root");
    Ok(cleaned)
}

fn ensure_directory(path: &Path) -> CliResult<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(CliError::Message(format!(
            "Root directory not found: {}",
            path.display()
        )))
    }
}
