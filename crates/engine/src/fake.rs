// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake command runner for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use crate::{CommandRunner, RunError};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recorded run call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunCall {
    pub command: String,
}

/// Fake runner with scripted exit codes
///
/// Commands exit 0 unless scripted otherwise. Every launch is recorded, and
/// the peak number of commands running at once is tracked.
#[derive(Clone, Default)]
pub struct FakeRunner {
    exit_codes: Arc<Mutex<HashMap<String, i32>>>,
    spawn_failures: Arc<Mutex<HashSet<String>>>,
    calls: Arc<Mutex<Vec<RunCall>>>,
    in_flight: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
    delay: Duration,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command` exit with `code`
    pub fn with_exit(self, command: &str, code: i32) -> Self {
        self.exit_codes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(command.to_string(), code);
        self
    }

    /// Make `command` fail to spawn
    pub fn with_spawn_failure(self, command: &str) -> Self {
        self.spawn_failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(command.to_string());
        self
    }

    /// Keep every command running for `delay` before it exits
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<RunCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Commands launched so far, in launch order
    pub fn commands(&self) -> Vec<String> {
        self.calls().into_iter().map(|c| c.command).collect()
    }

    /// Highest number of commands observed running at the same time
    pub fn peak_concurrency(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, command: &str) -> Result<i32, RunError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RunCall {
                command: command.to_string(),
            });

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(running, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let fails_to_spawn = self
            .spawn_failures
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(command);
        if fails_to_spawn {
            return Err(RunError::Spawn {
                command: command.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "fake spawn failure"),
            });
        }

        let code = self
            .exit_codes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(command)
            .copied()
            .unwrap_or(0);
        Ok(code)
    }
}
