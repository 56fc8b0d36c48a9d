// SPDX-License-Identifier: Apache-2.0

//! Error types for reposcout.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur while fetching, filtering or opening repositories.
#[derive(Error, Debug)]
pub enum ReposcoutError {
    /// Input rejected before any network call (e.g. empty token).
    #[error("{message}")]
    Validation {
        /// Human-readable reason.
        message: String,
    },

    /// GitHub rejected the token (401 Unauthorized or 403 Forbidden).
    #[error("GitHub rejected the access token (HTTP {status}) - check the token and its scopes")]
    Auth {
        /// HTTP status code returned by GitHub.
        status: u16,
    },

    /// The request could not be completed (DNS, connection refused, timeout).
    #[error("Could not reach the GitHub API: {0}")]
    Network(#[from] reqwest::Error),

    /// Any other non-success status (rate limiting, server error).
    #[error("GitHub API error (HTTP {status})")]
    Api {
        /// HTTP status code returned by GitHub.
        status: u16,
    },

    /// The response body was not the expected repository list.
    #[error("Invalid response from the GitHub API")]
    InvalidResponse(#[source] serde_json::Error),

    /// The `next` link chain did not terminate.
    #[error("Pagination aborted at {url}: {reason}")]
    Pagination {
        /// The `next` URL that tripped the guard.
        url: String,
        /// Why the guard tripped.
        reason: String,
    },

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// The browser could not be launched for a repository URL.
    #[error("Could not open {url}: {message}")]
    Launch {
        /// URL that failed to open.
        url: String,
        /// Error message from the launcher.
        message: String,
    },
}

impl ReposcoutError {
    /// Error for a submission without an access token.
    #[must_use]
    pub fn empty_token() -> Self {
        ReposcoutError::Validation {
            message: "Please enter a GitHub personal access token".to_string(),
        }
    }

    /// Classifies a non-success HTTP status into `Auth` or `Api`.
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ReposcoutError::Auth { status },
            _ => ReposcoutError::Api { status },
        }
    }
}

impl From<config::ConfigError> for ReposcoutError {
    fn from(err: config::ConfigError) -> Self {
        ReposcoutError::Config {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_and_forbidden_are_auth_errors() {
        assert!(matches!(
            ReposcoutError::from_status(401),
            ReposcoutError::Auth { status: 401 }
        ));
        assert!(matches!(
            ReposcoutError::from_status(403),
            ReposcoutError::Auth { status: 403 }
        ));
    }

    #[test]
    fn test_other_statuses_are_api_errors() {
        for status in [404, 422, 429, 500, 502] {
            assert!(matches!(
                ReposcoutError::from_status(status),
                ReposcoutError::Api { status: s } if s == status
            ));
        }
    }

    #[test]
    fn test_api_error_message_includes_status() {
        let err = ReposcoutError::Api { status: 502 };
        assert_eq!(err.to_string(), "GitHub API error (HTTP 502)");
    }
}
