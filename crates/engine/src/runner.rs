// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command runners

use crate::RunError;
use async_trait::async_trait;
use std::path::PathBuf;

/// Runs one command string to completion
#[async_trait]
pub trait CommandRunner: Clone + Send + Sync + 'static {
    /// Run `command` and return its exit status
    async fn run(&self, command: &str) -> Result<i32, RunError>;
}

/// Runs commands through `sh -c` with inherited standard streams
#[derive(Debug, Clone)]
pub struct ShellRunner {
    shell: PathBuf,
    cwd: Option<PathBuf>,
}

impl Default for ShellRunner {
    fn default() -> Self {
        Self {
            shell: PathBuf::from("sh"),
            cwd: None,
        }
    }
}

impl ShellRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different shell binary (it must accept `-c <command>`)
    pub fn with_shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Run commands from `cwd` instead of the current directory
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str) -> Result<i32, RunError> {
        let mut cmd = tokio::process::Command::new(&self.shell);
        cmd.arg("-c").arg(command);

        if let Some(cwd) = &self.cwd {
            if !cwd.is_dir() {
                return Err(RunError::MissingCwd(cwd.clone()));
            }
            cmd.current_dir(cwd);
        }

        let status = cmd.status().await.map_err(|source| RunError::Spawn {
            command: command.to_string(),
            source,
        })?;

        // Killed by a signal: no exit code
        Ok(status.code().unwrap_or(-1))
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
