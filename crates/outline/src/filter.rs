// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Selection of asterisk lines from raw outline text

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

// Leading whitespace, a run of asterisks, trailing whitespace
// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static ASTERISK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\*+)\s*").expect("constant regex pattern is valid"));

/// A line of the outline that starts with asterisks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineLine {
    /// 1-based line number in the source text
    pub number: usize,
    /// Number of leading asterisks, always >= 1
    pub level: usize,
    /// Content after the asterisks, trimmed
    pub payload: String,
}

impl OutlineLine {
    /// Parse a single line, returning `None` when it does not start with asterisks
    pub fn parse(number: usize, line: &str) -> Option<Self> {
        let caps = ASTERISK_PATTERN.captures(line)?;
        let marker = caps.get(0)?;
        let stars = caps.get(1)?;
        Some(Self {
            number,
            level: stars.as_str().len(),
            payload: line[marker.end()..].trim().to_string(),
        })
    }
}

/// Check if a line starts with asterisks, up to leading whitespace
pub fn is_outline_line(line: &str) -> bool {
    ASTERISK_PATTERN.is_match(line)
}

/// Keep the asterisk lines of `text`, in order
///
/// Everything else (prose, comments, blank lines) is dropped silently.
pub fn filter_lines(text: &str) -> Vec<OutlineLine> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| OutlineLine::parse(idx + 1, line))
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
