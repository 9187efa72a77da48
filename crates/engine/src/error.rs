// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for command execution

use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent a command from producing an exit status
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("working directory does not exist: {0}")]
    MissingCwd(PathBuf),
    #[error("command task aborted: {0}")]
    Join(String),
}
