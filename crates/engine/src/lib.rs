// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! ciak execution engine
//!
//! Runs a compiled [`ciak_outline::Plan`] block by block. Sequential blocks
//! run one command at a time; parallel blocks launch every command and wait
//! for all of them before moving on.

mod error;
mod executor;
mod report;
mod runner;
mod traced;

pub use error::RunError;
pub use executor::{Executor, ExecutorConfig};
pub use report::{CommandOutcome, CommandStatus, RunReport};
pub use runner::{CommandRunner, ShellRunner};
pub use traced::TracedRunner;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeRunner, RunCall};
