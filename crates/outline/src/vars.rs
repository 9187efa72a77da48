// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Substitution values from TOML files
//!
//! A vars file is a flat TOML table:
//!
//! ```toml
//! target = "release"
//! jobs = 8
//! ```
//!
//! Strings are used as-is; integers, floats and booleans are rendered with
//! their TOML spelling.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading a vars file
#[derive(Debug, Error)]
pub enum VarsError {
    #[error("cannot read vars file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("vars.{0} must be a string, number or boolean")]
    InvalidValue(String),
}

/// Parse vars from TOML content
pub fn parse_vars(content: &str) -> Result<HashMap<String, String>, VarsError> {
    let table: toml::Table = toml::from_str(content)?;

    table
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                toml::Value::String(s) => s,
                toml::Value::Integer(i) => i.to_string(),
                toml::Value::Float(f) => f.to_string(),
                toml::Value::Boolean(b) => b.to_string(),
                _ => return Err(VarsError::InvalidValue(key)),
            };
            Ok((key, value))
        })
        .collect()
}

/// Read and parse a vars file
pub fn load_vars(path: &Path) -> Result<HashMap<String, String>, VarsError> {
    let content = std::fs::read_to_string(path).map_err(|source| VarsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded vars file");
    parse_vars(&content)
}

#[cfg(test)]
#[path = "vars_tests.rs"]
mod tests;
