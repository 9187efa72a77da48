// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Plan executor

use crate::report::elapsed_ms;
use crate::{CommandOutcome, CommandRunner, CommandStatus, RunError, RunReport};
use ciak_outline::{Command, ExecutionBlock, Plan};
use tracing::Instrument;

/// Execution options
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutorConfig {
    /// Stop launching commands after the first failure
    pub fail_fast: bool,
}

/// Runs plans block by block with the configured runner
pub struct Executor<R> {
    runner: R,
    config: ExecutorConfig,
}

impl<R: CommandRunner> Executor<R> {
    /// Create a new executor
    pub fn new(runner: R, config: ExecutorConfig) -> Self {
        Self { runner, config }
    }

    /// Run every block of `plan` in order
    ///
    /// Commands that fail never stop the run unless fail-fast is on. With
    /// fail-fast, a failure in a sequential block stops it right away; a
    /// failure in a parallel block is noticed once all its commands finish.
    /// Commands not launched are reported as skipped.
    pub async fn run(&self, plan: &Plan) -> RunReport {
        let mut report = RunReport::default();

        for (index, block) in plan.blocks.iter().enumerate() {
            if report.aborted {
                report
                    .outcomes
                    .extend(block.commands.iter().map(|c| skipped(index, block, c)));
                continue;
            }

            let span = tracing::info_span!(
                "block",
                index,
                parallel = block.is_parallel,
                commands = block.len()
            );
            let outcomes = if block.is_parallel {
                self.run_parallel(index, block).instrument(span).await
            } else {
                self.run_sequential(index, block).instrument(span).await
            };

            if self.config.fail_fast && outcomes.iter().any(|o| o.status.is_failure()) {
                tracing::warn!(block = index, "fail-fast: not launching further commands");
                report.aborted = true;
            }
            report.outcomes.extend(outcomes);
        }

        tracing::info!(
            executed = report.executed(),
            failed = report.failures().count(),
            skipped = report.skipped(),
            "run finished"
        );
        report
    }

    async fn run_sequential(&self, index: usize, block: &ExecutionBlock) -> Vec<CommandOutcome> {
        let mut outcomes = Vec::with_capacity(block.len());
        let mut stopped = false;

        for command in &block.commands {
            if stopped {
                outcomes.push(skipped(index, block, command));
                continue;
            }
            let outcome = run_command(self.runner.clone(), index, false, command.clone()).await;
            stopped = self.config.fail_fast && outcome.status.is_failure();
            outcomes.push(outcome);
        }

        outcomes
    }

    /// Launch every command, then wait for all of them in block order
    async fn run_parallel(&self, index: usize, block: &ExecutionBlock) -> Vec<CommandOutcome> {
        let handles: Vec<_> = block
            .commands
            .iter()
            .map(|command| {
                let task = run_command(self.runner.clone(), index, true, command.clone());
                (command, tokio::spawn(task.in_current_span()))
            })
            .collect();

        let mut outcomes = Vec::with_capacity(handles.len());
        for (command, handle) in handles {
            let outcome = match handle.await {
                Ok(outcome) => outcome,
                Err(e) => {
                    let error = RunError::Join(e.to_string());
                    tracing::error!(command = %command, error = %error, "command task failed");
                    outcome_for(
                        index,
                        true,
                        command,
                        CommandStatus::SpawnFailed {
                            error: error.to_string(),
                        },
                        0,
                    )
                }
            };
            outcomes.push(outcome);
        }

        outcomes
    }
}

async fn run_command<R: CommandRunner>(
    runner: R,
    block: usize,
    parallel: bool,
    command: Command,
) -> CommandOutcome {
    let start = std::time::Instant::now();
    let status = match runner.run(&command.text).await {
        Ok(code) => CommandStatus::Exited { code },
        Err(e) => CommandStatus::SpawnFailed {
            error: e.to_string(),
        },
    };
    let elapsed_ms = elapsed_ms(start);

    tracing::debug!(line = command.line, status = ?status, elapsed_ms, "command finished");
    outcome_for(block, parallel, &command, status, elapsed_ms)
}

fn skipped(index: usize, block: &ExecutionBlock, command: &Command) -> CommandOutcome {
    outcome_for(index, block.is_parallel, command, CommandStatus::Skipped, 0)
}

fn outcome_for(
    block: usize,
    parallel: bool,
    command: &Command,
    status: CommandStatus,
    elapsed_ms: u64,
) -> CommandOutcome {
    CommandOutcome {
        command: command.text.clone(),
        line: command.line,
        block,
        parallel,
        status,
        elapsed_ms,
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
