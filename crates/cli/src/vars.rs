// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Building the substitution mapping from CLI flags

use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

/// Parse a `key=value` flag
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid key=value: no `=` found in `{s}`"))?;
    if pos == 0 {
        return Err(format!("invalid key=value: empty key in `{s}`"));
    }
    Ok((s[..pos].to_string(), s[pos + 1..].to_string()))
}

/// Merge the vars file (if any) with `--set` pairs; later pairs win
pub fn build_mapping(
    vars_file: Option<&Path>,
    pairs: &[(String, String)],
) -> Result<HashMap<String, String>> {
    let mut vars = match vars_file {
        Some(path) => ciak_outline::load_vars(path)?,
        None => HashMap::new(),
    };
    vars.extend(pairs.iter().cloned());
    tracing::debug!(count = vars.len(), "substitution mapping ready");
    Ok(vars)
}

#[cfg(test)]
#[path = "vars_tests.rs"]
mod tests;
