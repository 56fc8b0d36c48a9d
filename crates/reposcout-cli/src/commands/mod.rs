// SPDX-License-Identifier: Apache-2.0

//! Command handlers for reposcout CLI.

pub mod browse;
pub mod completion;
pub mod list;
pub mod open;
pub mod types;

use std::io::IsTerminal;
use std::time::Duration;

use anyhow::{Context, Result};
use dialoguer::Password;
use indicatif::{ProgressBar, ProgressStyle};
use reposcout_core::{
    AppConfig, RepositoryFetcher, RepositoryView, ReposcoutError, TokenSource, resolve_token,
};
use secrecy::SecretString;
use tracing::{debug, info};

use crate::cli::{Commands, CompletionCommand, OutputContext};
use crate::output;

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if ctx.is_interactive() && ctx.progress {
        let s = ProgressBar::new_spinner();
        s.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .expect("Invalid spinner template"),
        );
        s.set_message(message.to_string());
        s.enable_steady_tick(Duration::from_millis(100));
        Some(s)
    } else {
        None
    }
}

/// Prompts for a token with masked input. Requires TTY.
///
/// Empty input is returned as-is so the caller reports it as a validation error.
fn prompt_token() -> Result<SecretString> {
    if !std::io::stdin().is_terminal() {
        return Err(ReposcoutError::empty_token().into());
    }

    let token = Password::new()
        .with_prompt("GitHub personal access token")
        .allow_empty_password(true)
        .interact()
        .context("Failed to read token from input")?;

    Ok(SecretString::from(token))
}

/// Resolves a token from the environment or `gh`, falling back to a prompt.
fn acquire_token(use_gh_cli: bool) -> Result<(SecretString, TokenSource)> {
    if let Some((token, source)) = resolve_token(use_gh_cli) {
        info!(source = %source, "Using GitHub token");
        return Ok((token, source));
    }
    Ok((prompt_token()?, TokenSource::Prompt))
}

/// Fetches all repositories for a resolved token into a sorted view.
async fn load_view(ctx: &OutputContext, config: &AppConfig, use_gh_cli: bool) -> Result<RepositoryView> {
    let (token, _) = acquire_token(use_gh_cli)?;
    let fetcher = RepositoryFetcher::from_config(&config.github)?;

    let spinner = maybe_spinner(ctx, "Loading repositories...");
    let result = fetcher.fetch_all_repositories(&token).await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    let mut view = RepositoryView::new();
    view.set_repositories(result?);
    debug!(total = view.repositories().len(), "Repositories loaded");
    Ok(view)
}

/// Dispatch to the appropriate command handler.
pub async fn run(
    command: Commands,
    ctx: OutputContext,
    config: &AppConfig,
    use_gh_cli: bool,
) -> Result<()> {
    match command {
        Commands::List { query } => {
            let view = load_view(&ctx, config, use_gh_cli).await?;
            let result = list::run(view, query);
            output::render(&result, &ctx)
        }

        Commands::Browse => browse::run(&ctx, config, use_gh_cli).await,

        Commands::Open { name } => {
            let view = load_view(&ctx, config, use_gh_cli).await?;
            let result = open::run(&view, &name, &crate::browser::SystemBrowser)?;
            output::render(&result, &ctx)
        }

        Commands::Completion(CompletionCommand::Generate { shell }) => {
            completion::run_generate(shell)
        }
    }
}
