// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flattening of the asterisk tree into full commands
//!
//! Each leaf of the tree produces one command made of the payloads on its
//! branch, root first:
//!
//! ```text
//! * One
//! ** Two
//! *** Three
//! ** Four
//! * Five
//! ```
//!
//! becomes `["One Two Three", "One Four", "Five"]`.

use crate::OutlineLine;
use serde::Serialize;
use std::fmt;

/// A full command produced by a leaf of the outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    /// Space-joined payloads from the root to the leaf
    pub text: String,
    /// Source line number of the leaf
    pub line: usize,
}

impl Command {
    pub fn new(text: impl Into<String>, line: usize) -> Self {
        Self {
            text: text.into(),
            line,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Walk the outline tree and emit one command per leaf, in order
///
/// A line is a leaf when it is the last line or the next line is not deeper.
/// After a leaf the open branch loses the leaf itself plus one entry for every
/// level the next line drops, counted from the asterisks and capped at the
/// branch length. Skipping levels on the way down therefore closes more than
/// the level numbers suggest: `* a`, `*** b`, `** c` gives `a b` then `c`.
pub fn flatten(lines: &[OutlineLine]) -> Vec<Command> {
    let mut branch: Vec<&str> = Vec::new();
    let mut commands = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        branch.push(line.payload.as_str());

        let next_level = lines.get(idx + 1).map(|next| next.level);
        if next_level.is_some_and(|next| next > line.level) {
            continue;
        }

        let text = branch
            .iter()
            .copied()
            .filter(|payload| !payload.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        commands.push(Command::new(text, line.number));

        if let Some(next) = next_level {
            let close = 1 + (line.level - next);
            branch.truncate(branch.len().saturating_sub(close));
        }
    }

    commands
}

/// Flatten already-filtered raw lines into plain command strings
///
/// Lines that do not start with asterisks are ignored.
pub fn prepare_commands<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let parsed: Vec<OutlineLine> = lines
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| OutlineLine::parse(idx + 1, line.as_ref()))
        .collect();

    flatten(&parsed).into_iter().map(|c| c.text).collect()
}

#[cfg(test)]
#[path = "flatten_tests.rs"]
mod tests;
