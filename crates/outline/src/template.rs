// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Template variable substitution

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

// Regex pattern for {{name}} and {{name::default}}, shortest match so `}}` ends it
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static PLACEHOLDER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(.*?)\}\}").expect("constant regex pattern is valid"));

const DEFAULT_SEPARATOR: &str = "::";

/// Errors that can occur during substitution
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("missing value for `{{{{{0}}}}}` and no default given")]
    MissingValue(String),
    #[error("placeholder `{0}` has no name")]
    EmptyName(String),
}

/// Replace `{{name}}` and `{{name::default}}` placeholders with values from `vars`
///
/// Values from `vars` win over defaults. Names are matched exactly and
/// case-sensitively; surrounding whitespace inside the braces is ignored.
/// Substituted text is never scanned again, so defaults and values may
/// contain braces.
pub fn substitute(template: &str, vars: &HashMap<String, String>) -> Result<String, TemplateError> {
    let mut result = String::with_capacity(template.len());
    let mut last = 0;

    for caps in PLACEHOLDER_PATTERN.captures_iter(template) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let (name, default) = match inner.as_str().split_once(DEFAULT_SEPARATOR) {
            Some((name, default)) => (name.trim(), Some(default)),
            None => (inner.as_str().trim(), None),
        };
        if name.is_empty() {
            return Err(TemplateError::EmptyName(whole.as_str().to_string()));
        }

        result.push_str(&template[last..whole.start()]);
        match (vars.get(name), default) {
            (Some(value), _) => result.push_str(value),
            (None, Some(default)) => result.push_str(default),
            (None, None) => return Err(TemplateError::MissingValue(name.to_string())),
        }
        last = whole.end();
    }

    result.push_str(&template[last..]);
    Ok(result)
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
