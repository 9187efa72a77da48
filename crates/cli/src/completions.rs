// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation for the ciak CLI.
//!
//! Install completions using:
//!
//! ```bash
//! # Bash
//! ciak --completions bash > ~/.local/share/bash-completion/completions/ciak
//!
//! # Zsh
//! ciak --completions zsh > ~/.zfunc/_ciak
//!
//! # Fish
//! ciak --completions fish > ~/.config/fish/completions/ciak.fish
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

/// Generate shell completions and write to stdout.
pub fn generate_completions<C: CommandFactory>(shell: Shell) {
    let mut cmd = C::command();
    generate(shell, &mut cmd, "ciak", &mut io::stdout());
}
