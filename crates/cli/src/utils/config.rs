//! Config file reading and writing

use crate::error::{CliError, CliResult};
use autoplan_planner::{parse_config, render_config, AtlantisConfig};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Config file name used when `--config-file` is not given
pub const DEFAULT_CONFIG_FILE: &str = "atlantis.yaml";

/// Path of the config file inside the repository root
pub fn config_path(root: &Path, config_file: &str) -> PathBuf {
    root.join(config_file)
}

/// Read and parse the config file. A missing file is an error.
pub fn read_config(path: &Path) -> CliResult<AtlantisConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::Message(format!(
            "Failed to read config file {}: {e}",
            path.display()
        ))
    })?;

    Ok(parse_config(&content)?)
}

/// Render `config` and replace the file at `path` atomically.
///
/// The document is written to a temporary file in the same directory and
/// renamed over the target, so a failure leaves the previous file intact.
/// An existing target keeps its permissions.
pub fn write_config(path: &Path, config: &AtlantisConfig) -> CliResult<()> {
    let rendered = render_config(config)?;
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(rendered.as_bytes())?;
    if let Ok(metadata) = fs::metadata(path) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| CliError::Io(e.error))?;

    debug!(path = %path.display(), bytes = rendered.len(), "wrote config file");
    Ok(())
}
