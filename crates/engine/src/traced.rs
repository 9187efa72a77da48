// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced runner wrapper for consistent observability

use crate::report::elapsed_ms;
use crate::{CommandRunner, RunError};
use async_trait::async_trait;
use tracing::Instrument;

/// Wrapper that adds tracing to any CommandRunner
#[derive(Clone)]
pub struct TracedRunner<R> {
    inner: R,
}

impl<R> TracedRunner<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

#[async_trait]
impl<R: CommandRunner> CommandRunner for TracedRunner<R> {
    async fn run(&self, command: &str) -> Result<i32, RunError> {
        // The span has to follow the future across worker threads
        let span = tracing::info_span!("command.run", command);

        async {
            tracing::info!("starting");

            let start = std::time::Instant::now();
            let result = self.inner.run(command).await;
            let elapsed_ms = elapsed_ms(start);

            match &result {
                Ok(0) => tracing::info!(elapsed_ms, exit_code = 0, "completed"),
                Ok(code) => tracing::warn!(elapsed_ms, exit_code = code, "failed"),
                Err(e) => tracing::error!(elapsed_ms, error = %e, "spawn failed"),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
