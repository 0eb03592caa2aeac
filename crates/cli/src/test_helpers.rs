//! Test helpers for unit tests
//!
//! This module provides shared utilities for unit tests within the CLI crate.
//! For integration tests, see `tests/integration_test_helpers.rs`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const BASE_ATLANTIS_YAML: &str = "automerge: true
delete_source_branch_on_merge: true
parallel_apply: true
parallel_plan: true
version: 3
";

/// Guard for changing the current working directory in tests.
/// Automatically restores the original directory when dropped.
pub struct DirGuard {
    original_dir: PathBuf,
}

impl DirGuard {
    /// Create a new DirGuard and change to the specified directory.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, std::io::Error> {
        let path = path.as_ref();
        fs::create_dir_all(path)?;
        let original_dir = std::env::current_dir()?;
        std::env::set_current_dir(path)?;
        Ok(DirGuard { original_dir })
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

/// Write `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Two projects sharing a chain of local modules:
/// `project1 -> modules/module1 -> modules/module2` and `project2 -> modules/module2`.
pub fn sample_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_file(root, "atlantis.yaml", BASE_ATLANTIS_YAML);
    write_file(
        root,
        "project1/main.tf",
        "terraform {\n  backend \"s3\" {}\n}\n\nmodule \"module1\" {\n  source = \"../modules/module1\"\n}\n",
    );
    write_file(
        root,
        "project2/main.tf",
        "terraform {\n  backend \"s3\" {}\n}\n\nmodule \"module2\" {\n  source = \"../modules/module2\"\n}\n",
    );
    write_file(
        root,
        "modules/module1/main.tf",
        "module \"module2\" {\n  source = \"../module2\"\n}\n",
    );
    write_file(root, "modules/module2/main.tf", "variable \"name\" {}\n");

    temp_dir
}
