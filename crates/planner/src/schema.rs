/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * The repository configuration document (`atlantis.yaml`).
 *
 * Keys are rendered in field declaration order. Scalar options are read and
 * written back untouched; `projects` is regenerated.
 */

use crate::error::DocumentError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlantisConfig {
    #[serde(rename = "automerge")]
    pub automerge: bool,
    #[serde(rename = "delete_source_branch_on_merge")]
    pub delete_source_branch_on_merge: bool,
    #[serde(rename = "parallel_apply")]
    pub parallel_apply: bool,
    #[serde(rename = "parallel_plan")]
    pub parallel_plan: bool,
    #[serde(rename = "projects")]
    pub projects: Vec<ProjectConfig>,
    #[serde(rename = "version")]
    pub version: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    #[serde(rename = "autoplan")]
    pub autoplan: AutoplanConfig,
    #[serde(rename = "name")]
    pub name: String,
    #[serde(rename = "dir")]
    pub dir: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoplanConfig {
    #[serde(rename = "enabled")]
    pub enabled: bool,
    #[serde(rename = "when_modified")]
    pub when_modified: Vec<String>,
}

impl ProjectConfig {
    /// Autoplan-enabled project whose name and dir are both `relative_name`.
    pub fn new(relative_name: impl Into<String>, when_modified: Vec<String>) -> Self {
        let relative_name = relative_name.into();
        Self {
            autoplan: AutoplanConfig {
                enabled: true,
                when_modified,
            },
            name: relative_name.clone(),
            dir: relative_name,
        }
    }
}

/// Parse a configuration document. Empty input yields the default document.
///
/// Unknown keys are ignored; missing keys take their zero value.
pub fn parse_config(content: &str) -> Result<AtlantisConfig, DocumentError> {
    if content.trim().is_empty() {
        return Ok(AtlantisConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| DocumentError::InvalidYaml(e.to_string()))
}

/// Render a configuration document as YAML.
pub fn render_config(config: &AtlantisConfig) -> Result<String, DocumentError> {
    serde_yaml::to_string(config).map_err(|e| DocumentError::Render(e.to_string()))
}
