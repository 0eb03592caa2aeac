//! Test helpers for integration tests

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

// CARGO_BIN_EXE_autoplan is set by Cargo when running integration tests
const BINARY_NAME: &str = env!("CARGO_BIN_EXE_autoplan");

pub const BASE_ATLANTIS_YAML: &str = "automerge: true
delete_source_branch_on_merge: true
parallel_apply: true
parallel_plan: true
version: 3
";

/// Terraform repository in a temporary directory
pub struct TestRepo {
    #[allow(dead_code)] // Used to keep temp directory alive during tests
    pub temp_dir: TempDir,
    pub repo_path: PathBuf,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// Create an empty repository with a base atlantis.yaml
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let repo_path = temp_dir.path().to_path_buf();
        let repo = Self {
            temp_dir,
            repo_path,
        };
        repo.write_file("atlantis.yaml", BASE_ATLANTIS_YAML);
        repo
    }

    /// Create the sample repository:
    /// `project1 -> modules/module1 -> modules/module2`, `project2 -> modules/module2`,
    /// plus ignored directories that would otherwise look like projects.
    pub fn sample() -> Self {
        let repo = Self::new();
        repo.write_file(".git/HEAD", "ref: refs/heads/main\n");
        repo.write_file(".github/workflows/main.tf", &backend_module(&[]));
        repo.write_file(
            "project1/main.tf",
            &backend_module(&["../modules/module1", "terraform-aws-modules/vpc/aws"]),
        );
        repo.write_file("project1/files/policy.json", "{}\n");
        repo.write_file(
            "project1/.terraform/modules/cached/main.tf",
            &backend_module(&[]),
        );
        repo.write_file("project2/main.tf", &backend_module(&["../modules/module2"]));
        repo.write_file(
            "modules/module1/main.tf",
            &plain_module(&["../module2", "../module2"]),
        );
        repo.write_file("modules/module2/main.tf", "variable \"name\" {}\n");
        repo.write_file("modules/module2/files/script.sh", "#!/bin/sh\n");
        repo
    }

    /// Get path to a file in the repository
    #[allow(dead_code)] // Used across multiple test files
    pub fn path(&self, relative_path: &str) -> PathBuf {
        self.repo_path.join(relative_path)
    }

    /// Read file content
    #[allow(dead_code)] // Used across multiple test files
    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.path(relative_path)).unwrap()
    }

    /// Write file content
    pub fn write_file(&self, relative_path: &str, content: &str) {
        let path = self.repo_path.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Run autoplan from the repository root and return output
    pub fn run_command(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(BINARY_NAME);
        cmd.current_dir(&self.repo_path);
        cmd.env_remove("DIR");
        cmd.args(args);
        cmd.output().unwrap()
    }

    /// Run autoplan and assert success
    #[allow(dead_code)] // Used across multiple test files
    pub fn run_command_success(&self, args: &[&str]) -> Output {
        let output = self.run_command(args);
        if !output.status.success() {
            eprintln!("Command failed: autoplan {}", args.join(" "));
            eprintln!("stdout: {}", String::from_utf8_lossy(&output.stdout));
            eprintln!("stderr: {}", String::from_utf8_lossy(&output.stderr));
            panic!("Command failed with exit code: {:?}", output.status.code());
        }
        output
    }

    /// Run autoplan and assert failure
    #[allow(dead_code)] // Used across multiple test files
    pub fn run_command_failure(&self, args: &[&str]) -> Output {
        let output = self.run_command(args);
        assert!(!output.status.success(), "Command should have failed");
        output
    }
}

/// A module with an S3 backend calling each of `sources`
pub fn backend_module(sources: &[&str]) -> String {
    format!(
        "terraform {{\n  backend \"s3\" {{}}\n}}\n{}",
        module_calls(sources)
    )
}

/// A module without a backend calling each of `sources`
pub fn plain_module(sources: &[&str]) -> String {
    module_calls(sources)
}

fn module_calls(sources: &[&str]) -> String {
    sources
        .iter()
        .enumerate()
        .map(|(i, source)| format!("\nmodule \"m{i}\" {{\n  source = \"{source}\"\n}}\n"))
        .collect()
}

/// Stdout of a finished command as a string
#[allow(dead_code)] // Used across multiple test files
pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished command as a string
#[allow(dead_code)] // Used across multiple test files
pub fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
