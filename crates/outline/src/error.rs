// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for outline compilation

use crate::TemplateError;
use thiserror::Error;

/// Fatal errors found while compiling an outline into a plan
///
/// Every variant names the source line that triggered it.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: parallel block opened here is never closed with `# END_PARALLEL`")]
    UnterminatedParallel { line: usize },
    #[error("line {line}: `# END_PARALLEL` without a matching `# BEGIN_PARALLEL`")]
    UnmatchedEnd { line: usize },
    #[error("line {line}: `# BEGIN_PARALLEL` inside the parallel block opened on line {open}")]
    NestedParallel { line: usize, open: usize },
    #[error("line {line}: {source}")]
    Template {
        line: usize,
        #[source]
        source: TemplateError,
    },
}

impl ParseError {
    /// Source line the error points at
    pub fn line(&self) -> usize {
        match self {
            ParseError::UnterminatedParallel { line }
            | ParseError::UnmatchedEnd { line }
            | ParseError::NestedParallel { line, .. }
            | ParseError::Template { line, .. } => *line,
        }
    }
}
