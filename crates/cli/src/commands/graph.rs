//! Graph command implementation
//!
//! Prints what discovery found: the projects and every visited directory with
//! its raw dependency addresses. Paths are shown relative to the root.

use crate::error::{CliError, CliResult};
use crate::utils::workspace::resolve_root;
use autoplan_planner::assembler::relative_name;
use autoplan_planner::{discover, Discovery, TerraformInspector};
use serde::Serialize;
use std::collections::BTreeMap;

pub struct Options {
    pub root: Option<String>,
    pub format: String,
}

/// Output format for the graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Yaml,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(Self::Text),
            "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Discovery results keyed by root-relative path
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct GraphReport {
    pub projects: Vec<String>,
    pub directories: BTreeMap<String, Vec<String>>,
}

impl GraphReport {
    pub fn from_discovery(root: &str, discovery: &Discovery) -> Self {
        Self {
            projects: discovery
                .projects
                .iter()
                .map(|project| relative_name(root, project))
                .collect(),
            directories: discovery
                .graph
                .iter()
                .map(|(dir, deps)| (relative_name(root, dir), deps.to_vec()))
                .collect(),
        }
    }

    fn to_text(&self) -> String {
        let mut out = format!("Projects ({}):\n", self.projects.len());
        for project in &self.projects {
            out.push_str(&format!("  {project}\n"));
        }

        out.push_str(&format!("\nDirectories ({}):\n", self.directories.len()));
        for (dir, deps) in &self.directories {
            out.push_str(&format!("  {dir}\n"));
            for dep in deps {
                out.push_str(&format!("    -> {dep}\n"));
            }
        }
        out
    }
}

pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("✗ Graph failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

fn run_inner(options: &Options) -> CliResult<()> {
    let format = OutputFormat::from_str(&options.format).ok_or_else(|| {
        CliError::Message(format!(
            "Unsupported format: {}. Supported formats: text, yaml",
            options.format
        ))
    })?;

    let report = build_report(options.root.as_deref())?;

    match format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(&report)
                .map_err(|e| CliError::Message(format!("Failed to render graph: {e}")))?;
            print!("{yaml}");
        }
    }

    Ok(())
}

fn build_report(root: Option<&str>) -> CliResult<GraphReport> {
    let root = resolve_root(root)?;
    let discovery = discover(&root, &TerraformInspector)?;

    let root = root.to_string_lossy();
    Ok(GraphReport::from_discovery(&root, &discovery))
}
