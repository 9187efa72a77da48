// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-command results and run summaries

use serde::Serialize;
use std::fmt;
use std::time::Instant;

/// Milliseconds since `start`, saturating at `u64::MAX`
pub(crate) fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// How a single command ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandStatus {
    /// The process ran and exited; `-1` when killed by a signal
    Exited { code: i32 },
    /// The process could not be started
    SpawnFailed { error: String },
    /// Never launched because an earlier command failed under fail-fast
    Skipped,
}

impl CommandStatus {
    pub fn is_failure(&self) -> bool {
        match self {
            CommandStatus::Exited { code } => *code != 0,
            CommandStatus::SpawnFailed { .. } => true,
            CommandStatus::Skipped => false,
        }
    }

    pub fn exit_code(&self) -> Option<i32> {
        match self {
            CommandStatus::Exited { code } => Some(*code),
            _ => None,
        }
    }
}

/// Result of one command in the plan
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    pub command: String,
    /// Source line of the command in the outline
    pub line: usize,
    /// Index of the block the command belongs to
    pub block: usize,
    pub parallel: bool,
    #[serde(flatten)]
    pub status: CommandStatus,
    pub elapsed_ms: u64,
}

/// Results of a whole run, in plan order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub outcomes: Vec<CommandOutcome>,
    /// Whether fail-fast stopped the run early
    pub aborted: bool,
}

impl RunReport {
    pub fn success(&self) -> bool {
        !self.outcomes.iter().any(|o| o.status.is_failure())
    }

    pub fn failures(&self) -> impl Iterator<Item = &CommandOutcome> {
        self.outcomes.iter().filter(|o| o.status.is_failure())
    }

    pub fn first_failure(&self) -> Option<&CommandOutcome> {
        self.failures().next()
    }

    pub fn executed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status != CommandStatus::Skipped)
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.executed()
    }

    /// Process exit status for the run
    ///
    /// 0 on success, otherwise the first failing command's status when it
    /// fits in 1..=255, else 1.
    pub fn exit_code(&self) -> u8 {
        match self.first_failure().map(|o| o.status.exit_code()) {
            None => 0,
            Some(Some(code)) => u8::try_from(code).ok().filter(|c| *c != 0).unwrap_or(1),
            Some(None) => 1,
        }
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            let label = match &outcome.status {
                CommandStatus::Exited { code: 0 } => "ok".to_string(),
                CommandStatus::Exited { code } => format!("exit {}", code),
                CommandStatus::SpawnFailed { .. } => "error".to_string(),
                CommandStatus::Skipped => "skipped".to_string(),
            };
            writeln!(f, "{:<8} {}", label, outcome.command)?;
            if let CommandStatus::SpawnFailed { error } = &outcome.status {
                writeln!(f, "         -> {}", error)?;
            }
        }

        let failed = self.failures().count();
        write!(
            f,
            "{} commands: {} succeeded, {} failed",
            self.outcomes.len(),
            self.executed() - failed,
            failed
        )?;
        if self.skipped() > 0 {
            write!(f, ", {} skipped", self.skipped())?;
        }
        if self.aborted {
            write!(f, " (stopped by fail-fast)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
