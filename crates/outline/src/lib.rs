// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Outline parsing and plan compilation
//!
//! An outline is plain text where lines starting with asterisks form a tree:
//!
//! ```text
//! * cargo
//! ** build
//! ** test --workspace
//! * # BEGIN_PARALLEL
//! * touch {{out::a.txt}}
//! * touch b.txt
//! * # END_PARALLEL
//! ```
//!
//! Each leaf becomes one command (`cargo build`, `cargo test --workspace`, ...),
//! commands between the parallel markers are grouped into a parallel block,
//! and `{{name}}` placeholders are filled from a mapping.

mod block;
mod error;
mod filter;
mod flatten;
mod plan;
mod template;
mod vars;

pub use block::{extract_blocks, ExecutionBlock, Warning, BEGIN_PARALLEL, END_PARALLEL};
pub use error::ParseError;
pub use filter::{filter_lines, is_outline_line, OutlineLine};
pub use flatten::{flatten, prepare_commands, Command};
pub use plan::{compile, Plan};
pub use template::{substitute, TemplateError};
pub use vars::{load_vars, parse_vars, VarsError};
