// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compilation of outline text into an executable plan

use crate::{extract_blocks, filter_lines, flatten, substitute, ExecutionBlock, ParseError, Warning};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Ordered execution blocks with every placeholder resolved
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub blocks: Vec<ExecutionBlock>,
    pub warnings: Vec<Warning>,
}

impl Plan {
    /// Total number of commands across all blocks
    pub fn command_count(&self) -> usize {
        self.blocks.iter().map(ExecutionBlock::len).sum()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, block) in self.blocks.iter().enumerate() {
            let mode = if block.is_parallel {
                "parallel"
            } else {
                "sequential"
            };
            writeln!(f, "[{}] {}", idx + 1, mode)?;
            for command in &block.commands {
                writeln!(f, "    {}", command)?;
            }
        }
        Ok(())
    }
}

/// Compile outline text into a plan
///
/// Parallel markers are recognized before substitution, so a placeholder can
/// never turn into a marker. Any fatal error aborts the whole compilation.
pub fn compile(text: &str, vars: &HashMap<String, String>) -> Result<Plan, ParseError> {
    let lines = filter_lines(text);
    let commands = flatten(&lines);
    tracing::debug!(
        lines = lines.len(),
        commands = commands.len(),
        "flattened outline"
    );

    let (mut blocks, warnings) = extract_blocks(commands)?;

    for block in &mut blocks {
        for command in &mut block.commands {
            command.text = substitute(&command.text, vars).map_err(|source| {
                ParseError::Template {
                    line: command.line,
                    source,
                }
            })?;
        }
    }

    let plan = Plan { blocks, warnings };
    tracing::debug!(
        blocks = plan.blocks.len(),
        commands = plan.command_count(),
        warnings = plan.warnings.len(),
        "compiled plan"
    );
    Ok(plan)
}

#[cfg(test)]
#[path = "plan_tests.rs"]
mod tests;
