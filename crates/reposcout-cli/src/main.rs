// SPDX-License-Identifier: Apache-2.0

//! reposcout - list, filter and open every GitHub repository a token can see.
//!
//! Loads the repositories the authenticated user owns, collaborates on, or
//! reaches through organization membership, then filters them by name.

mod browser;
mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use reposcout_core::{AppConfig, load_config};
use tracing::debug;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", errors::format_error(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config: AppConfig = load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    if !config.ui.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet, config.ui.progress_bars);
    commands::run(cli.command, output_ctx, &config, !cli.no_gh).await
}
