// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ciak - run shell commands written as an asterisk outline

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod completions;
mod error;
mod output;
mod resolve;
mod vars;

use anyhow::{Context, Result};
use ciak_engine::{Executor, ExecutorConfig, ShellRunner, TracedRunner};
use clap::{ArgAction, Parser};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::error::CiakError;
use crate::output::OutputFormat;

/// Exit status for errors found before any command runs
const FATAL_EXIT: u8 = 2;

#[derive(Parser)]
#[command(
    name = "ciak",
    version,
    about = "ciak - run shell commands written as an asterisk outline"
)]
struct Cli {
    /// Outline file: a path, or a name looked up in --dir and the current directory
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Directory to look up outline names in (defaults to $CIAKFILES_DIR)
    #[arg(long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Value for a {{KEY}} placeholder (repeatable)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", value_parser = vars::parse_key_val)]
    set: Vec<(String, String)>,

    /// TOML file with placeholder values; --set wins over it
    #[arg(long, value_name = "FILE")]
    vars: Option<PathBuf>,

    /// Stop launching commands after the first failure
    #[arg(long)]
    fail_fast: bool,

    /// Print the plan without running anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Output format for the plan and the run summary
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// More logging on stderr (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        completions::generate_completions::<Cli>(shell);
        return ExitCode::SUCCESS;
    }

    setup_logging(cli.verbose);

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            match e.downcast_ref::<CiakError>() {
                Some(err) => eprint!("{}", err),
                None => eprintln!("error: {:#}", e),
            }
            ExitCode::from(FATAL_EXIT)
        }
    }
}

/// Resolve, compile and run the outline; returns the process exit status
async fn run(cli: Cli) -> Result<u8> {
    let cwd = std::env::current_dir().context("cannot determine the current directory")?;
    let search_dir = cli
        .dir
        .clone()
        .or_else(|| std::env::var_os(resolve::SEARCH_DIR_ENV).map(PathBuf::from));

    let path = resolve::resolve_outline(cli.file.as_deref(), search_dir.as_deref(), &cwd)?;
    tracing::info!(path = %path.display(), "using outline");

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let mapping = vars::build_mapping(cli.vars.as_deref(), &cli.set)?;
    let plan = ciak_outline::compile(&text, &mapping)
        .map_err(|e| CiakError::invalid_outline(&path, e))?;

    for warning in &plan.warnings {
        eprintln!("warning: {}: {}", path.display(), warning);
    }

    if cli.dry_run {
        output::print(&plan, cli.format);
        return Ok(0);
    }

    let executor = Executor::new(
        TracedRunner::new(ShellRunner::new()),
        ExecutorConfig {
            fail_fast: cli.fail_fast,
        },
    );
    let report = executor.run(&plan).await;
    output::print_summary(&report, cli.format);

    Ok(report.exit_code())
}

fn setup_logging(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
