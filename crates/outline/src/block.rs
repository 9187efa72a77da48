// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Grouping of commands into sequential and parallel execution blocks

use crate::{Command, ParseError};
use serde::Serialize;
use std::fmt;

/// Command that opens a parallel region
pub const BEGIN_PARALLEL: &str = "# BEGIN_PARALLEL";
/// Command that closes a parallel region
pub const END_PARALLEL: &str = "# END_PARALLEL";

/// A contiguous run of commands sharing the same execution mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionBlock {
    pub commands: Vec<Command>,
    pub is_parallel: bool,
}

impl ExecutionBlock {
    pub fn sequential(commands: Vec<Command>) -> Self {
        Self {
            commands,
            is_parallel: false,
        }
    }

    pub fn parallel(commands: Vec<Command>) -> Self {
        Self {
            commands,
            is_parallel: true,
        }
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Command texts, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.text.as_str()).collect()
    }
}

/// Non-fatal problems found while compiling an outline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A parallel region with nothing between its markers
    EmptyParallelBlock { begin: usize, end: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::EmptyParallelBlock { begin, end } => write!(
                f,
                "lines {}-{}: empty parallel block, nothing to run",
                begin, end
            ),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum State {
    Outside,
    InsideParallel { open: usize },
}

/// Split commands into blocks at the parallel markers
///
/// Markers are matched on the whole command, ignoring surrounding whitespace,
/// and never appear in any block. Empty parallel regions produce a warning
/// and no block.
pub fn extract_blocks(
    commands: Vec<Command>,
) -> Result<(Vec<ExecutionBlock>, Vec<Warning>), ParseError> {
    let mut blocks = Vec::new();
    let mut warnings = Vec::new();
    let mut pending: Vec<Command> = Vec::new();
    let mut state = State::Outside;

    for command in commands {
        state = match (state, command.text.trim()) {
            (State::Outside, BEGIN_PARALLEL) => {
                if !pending.is_empty() {
                    blocks.push(ExecutionBlock::sequential(std::mem::take(&mut pending)));
                }
                State::InsideParallel { open: command.line }
            }
            (State::Outside, END_PARALLEL) => {
                return Err(ParseError::UnmatchedEnd { line: command.line });
            }
            (State::InsideParallel { open }, BEGIN_PARALLEL) => {
                return Err(ParseError::NestedParallel {
                    line: command.line,
                    open,
                });
            }
            (State::InsideParallel { open }, END_PARALLEL) => {
                if pending.is_empty() {
                    let warning = Warning::EmptyParallelBlock {
                        begin: open,
                        end: command.line,
                    };
                    tracing::warn!(%warning, "skipping parallel block");
                    warnings.push(warning);
                } else {
                    blocks.push(ExecutionBlock::parallel(std::mem::take(&mut pending)));
                }
                State::Outside
            }
            (state, _) => {
                pending.push(command);
                state
            }
        };
    }

    if let State::InsideParallel { open } = state {
        return Err(ParseError::UnterminatedParallel { line: open });
    }
    if !pending.is_empty() {
        blocks.push(ExecutionBlock::sequential(pending));
    }

    Ok((blocks, warnings))
}

#[cfg(test)]
#[path = "block_tests.rs"]
mod tests;
