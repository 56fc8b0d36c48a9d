// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `ReposcoutError` and appends a hint for the
//! error kind. Non-library errors are shown as their message.

use anyhow::Error;
use reposcout_core::error::ReposcoutError;
use reposcout_core::github::REQUIRED_SCOPES;

/// Formats an error for CLI display with helpful hints.
pub fn format_error(error: &Error) -> String {
    let Some(err) = error.downcast_ref::<ReposcoutError>() else {
        return format!("{error:#}");
    };

    match err {
        ReposcoutError::Auth { .. } => format!(
            "{err}\n\nTip: Make sure the token is valid and has the {} scopes.",
            scope_list()
        ),
        ReposcoutError::Network(_) => {
            format!("{err}\n\nTip: Check your internet connection and try again.")
        }
        ReposcoutError::Api { status: 429 } => format!(
            "{err}\n\nTip: You've hit the GitHub API rate limit. Wait a few minutes and try again."
        ),
        ReposcoutError::Api { .. } => {
            format!("{err}\n\nTip: GitHub may be having trouble. Try again in a moment.")
        }
        ReposcoutError::Validation { .. } => format!(
            "{err}\n\nTip: Set GH_TOKEN or GITHUB_TOKEN, or run from a terminal to be prompted."
        ),
        ReposcoutError::Config { .. } => format!(
            "{err}\n\nTip: Check your config file at {}",
            reposcout_core::config::config_file_path().display()
        ),
        ReposcoutError::Pagination { .. } => format!(
            "{err}\n\nTip: Raise github.max_pages in your config if you really can see that many repositories."
        ),
        ReposcoutError::InvalidResponse(_) | ReposcoutError::Launch { .. } => err.to_string(),
    }
}

/// Required scopes as a human-readable list, e.g. "`repo` and `read:org`".
fn scope_list() -> String {
    REQUIRED_SCOPES
        .iter()
        .map(|s| format!("`{s}`"))
        .collect::<Vec<_>>()
        .join(" and ")
}
