// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # reposcout Core
//!
//! Core library for the reposcout CLI - list, search and open every GitHub
//! repository a personal access token can see.
//!
//! This crate provides reusable components for:
//! - Fetching the full `/user/repos` listing, following `Link` pagination
//! - An in-memory search view over the fetched repositories
//! - A session object wiring both behind connect/query/open handlers
//! - Configuration management and token resolution
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use reposcout_core::{RepositoryFetcher, RepositoryView, load_config};
//! use secrecy::SecretString;
//!
//! # async fn example() -> reposcout_core::Result<()> {
//! let config = load_config()?;
//! let fetcher = RepositoryFetcher::from_config(&config.github)?;
//!
//! let token = SecretString::from("ghp_example");
//! let repos = fetcher.fetch_all_repositories(&token).await?;
//!
//! let mut view = RepositoryView::new();
//! view.set_repositories(repos);
//! view.set_query("octo");
//! println!("{}", view.summary());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types
//! - [`github`] - GitHub API (token resolution, repository listing)
//! - [`session`] - Connect/query/open handlers and display state
//! - [`view`] - Search/filter view-model

// ============================================================================
// Error Handling
// ============================================================================

pub use error::ReposcoutError;

/// Convenience Result type for reposcout operations.
///
/// This is equivalent to `std::result::Result<T, ReposcoutError>`.
pub type Result<T> = std::result::Result<T, ReposcoutError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{AppConfig, GitHubConfig, UiConfig, config_dir, config_file_path, load_config};

// ============================================================================
// GitHub Integration
// ============================================================================

pub use github::auth::{TokenSource, resolve_token};
pub use github::repos::{
    HttpTransport, PageResponse, PageTransport, RepositoryFetcher, RepositoryRecord,
};

// ============================================================================
// Search View and Session
// ============================================================================

pub use session::{DisplayState, Screen, Session, UrlLauncher};
pub use view::{RepositoryView, Summary};

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod github;
pub mod session;
pub mod view;
