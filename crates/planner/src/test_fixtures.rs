//! Test fixtures for unit tests
//!
//! Builds a small Terraform repository in a temporary directory:
//!
//! ```text
//! atlantis.yaml
//! .git/                  ignored
//! .github/               ignored
//! modules/module1/       calls ../module2 twice
//! modules/module2/files/
//! project1/              backend, calls ../modules/module1 and two sources that do not exist
//! project1/.terraform/   ignored, contains a backend module
//! project1/files/
//! project2/              backend, calls ../modules/module2
//! ```

#![cfg(test)]

use std::fs;
use std::path::Path;
use tempfile::TempDir;

pub const BASE_ATLANTIS_YAML: &str = "automerge: true
delete_source_branch_on_merge: true
parallel_apply: true
parallel_plan: true
version: 3
";

pub struct SampleRepo {
    #[allow(dead_code)] // Keeps the temp directory alive
    pub temp_dir: TempDir,
    pub root: String,
}

impl SampleRepo {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_str().unwrap().to_string();
        let repo = Self { temp_dir, root };

        repo.write("atlantis.yaml", BASE_ATLANTIS_YAML);
        repo.write(".git/HEAD", "ref: refs/heads/main\n");
        repo.write(".github/workflows/plan.tf", "terraform {\n  backend \"s3\" {}\n}\n");

        repo.write(
            "project1/main.tf",
            r#"terraform {
  backend "s3" {
    bucket = "state"
    key    = "project1.tfstate"
  }
}

module "module1" {
  source = "../modules/module1"
}

module "vpc" {
  source  = "terraform-aws-modules/vpc/aws"
  version = "5.0.0"
}

module "gone" {
  source = "../modules/gone"
}
"#,
        );
        repo.write("project1/files/policy.json", "{}\n");
        repo.write(
            "project1/.terraform/modules/cached/main.tf",
            "terraform {\n  backend \"local\" {}\n}\n",
        );

        repo.write(
            "project2/main.tf",
            r#"terraform {
  backend "s3" {}
}

module "module2" {
  source = "../modules/module2"
}
"#,
        );

        repo.write(
            "modules/module1/main.tf",
            r#"module "first" {
  source = "../module2"
}

module "second" {
  source = "../module2"
}
"#,
        );
        repo.write(
            "modules/module2/main.tf",
            "resource \"null_resource\" \"this\" {}\n",
        );
        repo.write("modules/module2/files/script.sh", "#!/bin/sh\n");

        repo
    }

    pub fn root_path(&self) -> &Path {
        Path::new(&self.root)
    }

    /// Absolute path of `relative` inside the repository, `/`-joined.
    pub fn path(&self, relative: &str) -> String {
        format!("{}/{relative}", self.root)
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.root_path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}
