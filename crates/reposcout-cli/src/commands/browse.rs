// SPDX-License-Identifier: Apache-2.0

//! Interactive browse session.
//!
//! Connect screen: take a token (environment, `gh`, or masked prompt) and
//! load every repository. Search screen: prompt for a query, show the
//! matching list, and open the selected repository in the browser.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use console::style;
use dialoguer::{Input, Select};
use reposcout_core::{AppConfig, DisplayState, RepositoryFetcher, Screen, Session, resolve_token};
use tracing::info;

use super::{maybe_spinner, prompt_token};
use crate::browser::SystemBrowser;
use crate::cli::OutputContext;
use crate::output::browse::{print_notification, print_state};

/// Rows shown at once in the repository picker.
const PICKER_ROWS: usize = 15;

/// What the user picked below the list.
enum Action {
    Open(String),
    SearchAgain,
    Quit,
}

/// Runs the interactive session until the user quits.
pub async fn run(ctx: &OutputContext, config: &AppConfig, use_gh_cli: bool) -> Result<()> {
    if !std::io::stdin().is_terminal() || !ctx.is_tty {
        anyhow::bail!("Interactive mode requires a terminal. Use `reposcout list` instead.");
    }

    let fetcher = RepositoryFetcher::from_config(&config.github)?;
    let mut session = Session::new(fetcher);

    let mut resolved = resolve_token(use_gh_cli);
    let mut state = session.display();
    while state.screen == Screen::Connect {
        let token = match resolved.take() {
            Some((token, source)) => {
                println!("{} Using token from {source}", style("*").cyan().bold());
                token
            }
            None => prompt_token()?,
        };

        let spinner = maybe_spinner(ctx, "Loading repositories...");
        state = session.on_connect_requested(&token).await;
        if let Some(s) = spinner {
            s.finish_and_clear();
        }

        if let Some(message) = &state.notification {
            print_notification(message);
        }
    }

    info!(total = state.summary.total, "Search screen ready");
    loop {
        print_state(&state, session.view().is_empty());
        if session.view().is_empty() {
            return Ok(());
        }

        match pick_action(&state)? {
            Action::Open(url) => {
                let opened = session.on_open_requested(&url, &SystemBrowser);
                if let Some(message) = &opened.notification {
                    print_notification(message);
                }
            }
            Action::SearchAgain => {
                let query = prompt_query(session.view().query())?;
                state = session.on_query_changed(&query);
            }
            Action::Quit => return Ok(()),
        }
    }
}

/// Reads the next query, pre-filled with the current one.
fn prompt_query(current: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt("Search repositories (owner/name)")
        .with_initial_text(current)
        .allow_empty(true)
        .interact_text()
        .context("Failed to read search query")
}

/// Lets the user open a visible repository, search again, or quit.
fn pick_action(state: &DisplayState) -> Result<Action> {
    let mut items: Vec<String> = state
        .entries
        .iter()
        .map(|r| r.display_name.clone())
        .collect();
    let search_index = items.len();
    items.push(style("[search again]").dim().to_string());
    items.push(style("[quit]").dim().to_string());

    let choice = Select::new()
        .with_prompt("Open a repository")
        .items(&items)
        .default(if state.entries.is_empty() { search_index } else { 0 })
        .max_length(PICKER_ROWS)
        .interact_opt()
        .context("Failed to read selection")?;

    Ok(match choice {
        Some(i) if i < search_index => Action::Open(state.entries[i].web_url.clone()),
        Some(i) if i == search_index => Action::SearchAgain,
        _ => Action::Quit,
    })
}
