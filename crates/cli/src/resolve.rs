// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locating the outline file to run

use crate::error::CiakError;
use std::path::{Path, PathBuf};

/// File name used when none is given on the command line
pub const DEFAULT_NAME: &str = "ciakfile";

/// Environment variable naming a directory of outline files
pub const SEARCH_DIR_ENV: &str = "CIAKFILES_DIR";

/// Find the outline file to run
///
/// Precedence:
/// 1. `target` as a path (relative to `cwd`), when it exists
/// 2. `target` (or [`DEFAULT_NAME`]) inside `search_dir`
/// 3. `target` (or [`DEFAULT_NAME`]) inside `cwd`
///
/// The returned path is absolute when `cwd` is.
pub fn resolve_outline(
    target: Option<&Path>,
    search_dir: Option<&Path>,
    cwd: &Path,
) -> Result<PathBuf, CiakError> {
    let name = target.unwrap_or(Path::new(DEFAULT_NAME));

    let ordered = [
        target.map(|target| cwd.join(target)),
        search_dir.map(|dir| cwd.join(dir).join(name)),
        Some(cwd.join(name)),
    ];
    let mut candidates: Vec<PathBuf> = Vec::new();
    for candidate in ordered.into_iter().flatten() {
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }

    for candidate in &candidates {
        tracing::debug!(path = %candidate.display(), "looking for outline");
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
    }

    Err(CiakError::outline_not_found(name, &candidates))
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
