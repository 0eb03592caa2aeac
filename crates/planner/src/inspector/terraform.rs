/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Terraform module inspector.
 *
 * A directory is a module when it directly contains `*.tf` or `*.tf.json`
 * files. Only two facts are extracted from them: whether a top-level
 * `terraform` block declares a `backend`, and the literal `source` of every
 * top-level `module` block.
 */

use super::lexer::{tokenize, Token, TokenKind};
use super::{ModuleInspector, ModuleReport};
use crate::error::InspectError;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Inspector for Terraform configuration directories.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerraformInspector;

impl ModuleInspector for TerraformInspector {
    fn inspect(&self, dir: &Path) -> Result<ModuleReport, InspectError> {
        let files = module_files(dir)?;
        if files.is_empty() {
            return Ok(ModuleReport::not_a_module());
        }

        let mut has_backend = false;
        let mut calls: Vec<ModuleCall> = Vec::new();
        let mut overrides: Vec<ModuleCall> = Vec::new();

        for file in &files {
            let content = fs::read_to_string(&file.path).map_err(|source| InspectError::Io {
                path: file.path.clone(),
                source,
            })?;

            let summary = if file.is_json {
                parse_json_module_source(&content, &file.path)?
            } else {
                parse_module_source(&content, &file.path)?
            };

            has_backend |= summary.has_backend;
            if file.is_override {
                overrides.extend(summary.module_calls);
                continue;
            }

            for call in summary.module_calls {
                if calls.iter().any(|existing| existing.name == call.name) {
                    return Err(InspectError::DuplicateModuleCall {
                        dir: dir.to_path_buf(),
                        name: call.name,
                    });
                }
                calls.push(call);
            }
        }

        for call in overrides {
            match calls.iter_mut().find(|existing| existing.name == call.name) {
                Some(existing) => {
                    if call.source.is_some() {
                        existing.source = call.source;
                    }
                }
                None => warn!(
                    dir = %dir.display(),
                    module = %call.name,
                    "override for undeclared module call ignored"
                ),
            }
        }

        let dependency_addresses: Vec<String> =
            calls.into_iter().filter_map(|call| call.source).collect();

        debug!(
            dir = %dir.display(),
            has_backend,
            dependencies = dependency_addresses.len(),
            "inspected module"
        );

        Ok(ModuleReport {
            is_module: true,
            has_backend,
            dependency_addresses,
        })
    }
}

/// One top-level `module` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleCall {
    pub name: String,
    /// `None` when the source is not a plain string literal
    pub source: Option<String>,
}

/// Facts extracted from a single configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSummary {
    pub has_backend: bool,
    pub module_calls: Vec<ModuleCall>,
}

struct ModuleFile {
    path: PathBuf,
    is_json: bool,
    is_override: bool,
}

fn module_files(dir: &Path) -> Result<Vec<ModuleFile>, InspectError> {
    let io_error = |source| InspectError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let entry = entry.map_err(io_error)?;
        if !entry.file_type().map_err(io_error)?.is_file() {
            continue;
        }

        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if is_ignored_file(name) {
            debug!(file = %name, "skipping hidden or editor file");
            continue;
        }

        let (stem, is_json) = if let Some(stem) = name.strip_suffix(".tf.json") {
            (stem, true)
        } else if let Some(stem) = name.strip_suffix(".tf") {
            (stem, false)
        } else {
            continue;
        };

        files.push(ModuleFile {
            path: entry.path(),
            is_json,
            is_override: stem == "override" || stem.ends_with("_override"),
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Hidden files and editor leftovers (`.main.tf`, `main.tf~`, `#main.tf#`).
fn is_ignored_file(name: &str) -> bool {
    name.starts_with('.')
        || name.ends_with('~')
        || (name.len() > 1 && name.starts_with('#') && name.ends_with('#'))
}

/// Extract backend and module call facts from HCL native syntax.
///
/// `path` is only used for error messages.
pub fn parse_module_source(content: &str, path: &Path) -> Result<FileSummary, InspectError> {
    let syntax_error = |line: usize, message: String| InspectError::Syntax {
        path: path.to_path_buf(),
        line,
        message,
    };

    let tokens = tokenize(content).map_err(|e| syntax_error(e.line, e.message))?;
    let body = BodyParser {
        tokens: &tokens,
        pos: 0,
    }
    .parse_body(false)
    .map_err(|(line, message)| syntax_error(line, message))?;

    let mut summary = FileSummary::default();
    for item in body {
        let Item::Block {
            kind, labels, body, ..
        } = item
        else {
            continue;
        };

        match kind.as_str() {
            "terraform" => {
                summary.has_backend |= body
                    .iter()
                    .any(|inner| matches!(inner, Item::Block { kind, .. } if kind == "backend"));
            }
            "module" => {
                let Some(name) = labels.into_iter().next() else {
                    continue;
                };
                let source = body.into_iter().find_map(|inner| match inner {
                    Item::Attribute { name, value } if name == "source" => Some(value),
                    _ => None,
                });
                summary.module_calls.push(ModuleCall {
                    name,
                    source: source.flatten(),
                });
            }
            _ => {}
        }
    }

    Ok(summary)
}

/// Extract backend and module call facts from Terraform JSON syntax.
pub fn parse_json_module_source(content: &str, path: &Path) -> Result<FileSummary, InspectError> {
    let root: Value = serde_json::from_str(content).map_err(|e| InspectError::InvalidJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut summary = FileSummary::default();

    if let Some(terraform) = root.get("terraform") {
        summary.has_backend = objects(terraform).any(|block| block.contains_key("backend"));
    }

    if let Some(modules) = root.get("module") {
        for block in objects(modules) {
            for (name, body) in block {
                let source = objects(body)
                    .find_map(|call| call.get("source"))
                    .and_then(Value::as_str)
                    .map(str::to_string);
                summary.module_calls.push(ModuleCall {
                    name: name.clone(),
                    source,
                });
            }
        }
    }

    Ok(summary)
}

/// JSON syntax allows a block to be given as an object or an array of objects.
fn objects(value: &Value) -> impl Iterator<Item = &serde_json::Map<String, Value>> {
    let items: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };
    items.into_iter().filter_map(Value::as_object)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Item {
    Block {
        kind: String,
        labels: Vec<String>,
        body: Vec<Item>,
    },
    Attribute {
        name: String,
        /// Set only for a lone, untemplated string literal
        value: Option<String>,
    },
}

type ParseFailure = (usize, String);

struct BodyParser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> BodyParser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn last_line(&self) -> usize {
        self.tokens.last().map_or(1, |t| t.line)
    }

    fn parse_body(&mut self, nested: bool) -> Result<Vec<Item>, ParseFailure> {
        let mut items = Vec::new();

        loop {
            while matches!(self.peek(), Some(t) if t.kind == TokenKind::Newline) {
                self.pos += 1;
            }

            let Some(token) = self.peek() else {
                if nested {
                    return Err((self.last_line(), "expected '}' before end of file".into()));
                }
                return Ok(items);
            };

            match &token.kind {
                TokenKind::CloseBrace if nested => {
                    self.pos += 1;
                    return Ok(items);
                }
                TokenKind::CloseBrace => return Err((token.line, "unexpected '}'".into())),
                TokenKind::Ident(name) => {
                    self.pos += 1;
                    if matches!(self.peek(), Some(t) if t.kind == TokenKind::Equals) {
                        self.pos += 1;
                        let value = self.parse_expression(token.line)?;
                        items.push(Item::Attribute {
                            name: name.clone(),
                            value,
                        });
                    } else {
                        let labels = self.parse_labels()?;
                        let body = self.parse_body(true)?;
                        items.push(Item::Block {
                            kind: name.clone(),
                            labels,
                            body,
                        });
                    }
                }
                _ => {
                    return Err((token.line, "expected an attribute or block".into()));
                }
            }
        }
    }

    /// Reads block labels and the opening brace.
    fn parse_labels(&mut self) -> Result<Vec<String>, ParseFailure> {
        let mut labels = Vec::new();
        loop {
            let Some(token) = self.peek() else {
                return Err((self.last_line(), "expected '{' before end of file".into()));
            };
            self.pos += 1;
            match &token.kind {
                TokenKind::OpenBrace => return Ok(labels),
                TokenKind::Ident(label) | TokenKind::Str(Some(label)) => labels.push(label.clone()),
                TokenKind::Str(None) => {
                    return Err((token.line, "block labels cannot contain templates".into()))
                }
                _ => return Err((token.line, "expected a block label or '{'".into())),
            }
        }
    }

    /// Consumes an attribute expression up to the end of its line.
    ///
    /// A closing brace at depth zero ends the expression without being
    /// consumed, which allows one-line blocks.
    fn parse_expression(&mut self, line: usize) -> Result<Option<String>, ParseFailure> {
        let start = self.pos;
        let mut depth = 0usize;

        while let Some(token) = self.peek() {
            match token.kind {
                TokenKind::Newline | TokenKind::CloseBrace if depth == 0 => break,
                TokenKind::OpenBrace | TokenKind::Open => depth += 1,
                TokenKind::CloseBrace | TokenKind::Close => depth = depth.saturating_sub(1),
                _ => {}
            }
            self.pos += 1;
        }

        if depth > 0 {
            return Err((line, "unclosed bracket in expression".into()));
        }

        Ok(match &self.tokens[start..self.pos] {
            [Token {
                kind: TokenKind::Str(Some(value)),
                ..
            }] => Some(value.clone()),
            _ => None,
        })
    }
}
