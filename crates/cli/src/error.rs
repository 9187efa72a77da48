// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fatal errors shown to the person running `ciak`
//!
//! Rendered as an `error:` headline, then `->` lines naming the file, line
//! or path involved, then numbered hints.

use crate::resolve::{DEFAULT_NAME, SEARCH_DIR_ENV};
use ciak_outline::{ParseError, TemplateError};
use std::fmt;
use std::path::{Path, PathBuf};

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// A fatal error raised before any command runs
#[derive(Debug)]
pub struct CiakError {
    pub message: String,
    /// Paths and lines involved
    pub context: Vec<String>,
    /// Hints, printed numbered
    pub suggestions: Vec<String>,
    pub source: Option<BoxedError>,
}

impl CiakError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, line: impl Into<String>) -> Self {
        self.context.push(line.into());
        self
    }

    pub fn with_suggestion(mut self, hint: impl Into<String>) -> Self {
        self.suggestions.push(hint.into());
        self
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for CiakError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
        }
        for line in &self.context {
            writeln!(f, "  -> {}", line)?;
        }

        if !self.suggestions.is_empty() {
            writeln!(f, "\nsuggestions:")?;
        }
        for (n, hint) in (1..).zip(&self.suggestions) {
            writeln!(f, "  {}. {}", n, hint)?;
        }

        Ok(())
    }
}

impl std::error::Error for CiakError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl CiakError {
    /// No candidate path held an outline file
    pub fn outline_not_found(name: &Path, tried: &[PathBuf]) -> Self {
        let mut err = CiakError::new(format!("cannot find outline '{}'", name.display()));
        for path in tried {
            err = err.with_context(format!("not found: {}", path.display()));
        }
        err.with_suggestion("Pass the path explicitly: ciak path/to/outline")
            .with_suggestion(format!(
                "Keep outlines in one directory and set {}",
                SEARCH_DIR_ENV
            ))
            .with_suggestion(format!(
                "Create a '{}' in the current directory",
                DEFAULT_NAME
            ))
    }

    /// The outline failed to compile; hints depend on what broke
    pub fn invalid_outline(path: &Path, err: ParseError) -> Self {
        let base = CiakError::new(format!("invalid outline {}", path.display()))
            .with_context(err.to_string());

        let base = match &err {
            ParseError::UnterminatedParallel { .. } => base.with_suggestion(
                "Close the block with a `* # END_PARALLEL` line after its last command",
            ),
            ParseError::UnmatchedEnd { .. } => base
                .with_suggestion("Remove the stray `# END_PARALLEL`")
                .with_suggestion("Or open the block with `* # BEGIN_PARALLEL` first"),
            ParseError::NestedParallel { .. } => base.with_suggestion(
                "Close the open block with `* # END_PARALLEL` before starting another",
            ),
            ParseError::Template {
                source: TemplateError::MissingValue(name),
                ..
            } => base
                .with_suggestion(format!("Pass a value: ciak -s {}=<value>", name))
                .with_suggestion(format!("Or give a default: {{{{{}::<default>}}}}", name)),
            ParseError::Template { .. } => {
                base.with_suggestion("Placeholders look like {{name}} or {{name::default}}")
            }
        };

        base.with_source(err)
    }
}
