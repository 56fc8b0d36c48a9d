// SPDX-License-Identifier: Apache-2.0

//! GitHub token resolution.
//!
//! Tokens live in memory for the duration of one session and are never
//! written anywhere. Resolution priority chain:
//! 1. Environment variable (`GH_TOKEN` or `GITHUB_TOKEN`)
//! 2. GitHub CLI (`gh auth token`)
//! 3. Interactive prompt (handled by the CLI)

use std::process::Command;

use secrecy::SecretString;
use serde::Serialize;
use tracing::{debug, instrument};

/// Source of the GitHub access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenSource {
    /// Token from `GH_TOKEN` or `GITHUB_TOKEN` environment variable.
    Environment,
    /// Token from `gh auth token` command.
    GhCli,
    /// Token typed into the interactive prompt.
    Prompt,
}

impl std::fmt::Display for TokenSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenSource::Environment => write!(f, "environment variable"),
            TokenSource::GhCli => write!(f, "GitHub CLI"),
            TokenSource::Prompt => write!(f, "interactive prompt"),
        }
    }
}

/// Attempts to get a token from the GitHub CLI (`gh auth token`).
///
/// Returns `None` if `gh` is not installed, not authenticated,
/// or prints nothing.
#[instrument]
fn get_token_from_gh_cli() -> Option<SecretString> {
    debug!("Attempting to get token from gh CLI");

    let output = Command::new("gh").args(["auth", "token"]).output();

    match output {
        Ok(output) if output.status.success() => {
            let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if token.is_empty() {
                debug!("gh auth token returned empty output");
                None
            } else {
                debug!("Successfully retrieved token from gh CLI");
                Some(SecretString::from(token))
            }
        }
        Ok(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr);
            debug!(
                status = ?output.status,
                stderr = %stderr.trim(),
                "gh auth token failed"
            );
            None
        }
        Err(e) => {
            debug!(error = %e, "Failed to execute gh command");
            None
        }
    }
}

/// Reads a non-empty token from the given environment variable.
fn token_from_env(var: &str) -> Option<SecretString> {
    match std::env::var(var) {
        Ok(token) if !token.is_empty() => {
            debug!(var, "Using token from environment variable");
            Some(SecretString::from(token))
        }
        _ => None,
    }
}

/// Resolves a GitHub token without user interaction.
///
/// Checks sources in order:
/// 1. `GH_TOKEN` environment variable
/// 2. `GITHUB_TOKEN` environment variable
/// 3. GitHub CLI (`gh auth token`), unless `use_gh_cli` is false
///
/// Returns the token and its source, or `None` so the caller can prompt.
#[instrument]
pub fn resolve_token(use_gh_cli: bool) -> Option<(SecretString, TokenSource)> {
    if let Some(token) = token_from_env("GH_TOKEN").or_else(|| token_from_env("GITHUB_TOKEN")) {
        return Some((token, TokenSource::Environment));
    }

    if use_gh_cli && let Some(token) = get_token_from_gh_cli() {
        debug!("Using token from GitHub CLI");
        return Some((token, TokenSource::GhCli));
    }

    debug!("No token found, caller must prompt");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use serial_test::serial;

    fn with_env<F: FnOnce()>(vars: &[(&str, Option<&str>)], f: F) {
        let originals: Vec<_> = vars
            .iter()
            .map(|(k, _)| ((*k).to_string(), std::env::var(k).ok()))
            .collect();
        unsafe {
            for (k, v) in vars {
                match v {
                    Some(v) => std::env::set_var(k, v),
                    None => std::env::remove_var(k),
                }
            }
        }

        f();

        unsafe {
            for (k, v) in originals {
                match v {
                    Some(v) => std::env::set_var(&k, v),
                    None => std::env::remove_var(&k),
                }
            }
        }
    }

    #[test]
    fn test_token_source_display() {
        assert_eq!(TokenSource::Environment.to_string(), "environment variable");
        assert_eq!(TokenSource::GhCli.to_string(), "GitHub CLI");
        assert_eq!(TokenSource::Prompt.to_string(), "interactive prompt");
    }

    #[test]
    #[serial]
    fn test_gh_token_takes_priority() {
        with_env(
            &[("GH_TOKEN", Some("gh-first")), ("GITHUB_TOKEN", Some("second"))],
            || {
                let (token, source) = resolve_token(false).expect("token from env");
                assert_eq!(token.expose_secret(), "gh-first");
                assert_eq!(source, TokenSource::Environment);
            },
        );
    }

    #[test]
    #[serial]
    fn test_empty_env_var_is_skipped() {
        with_env(
            &[("GH_TOKEN", Some("")), ("GITHUB_TOKEN", Some("fallback"))],
            || {
                let (token, _) = resolve_token(false).expect("token from env");
                assert_eq!(token.expose_secret(), "fallback");
            },
        );
    }

    #[test]
    #[serial]
    fn test_no_sources_returns_none() {
        with_env(&[("GH_TOKEN", None), ("GITHUB_TOKEN", None)], || {
            assert!(resolve_token(false).is_none());
        });
    }
}
