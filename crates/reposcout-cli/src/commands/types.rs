// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.
//!
//! Command handlers return data instead of printing directly; the output
//! module handles presentation.

use reposcout_core::{RepositoryRecord, Summary};
use serde::Serialize;

/// Result from the list command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListResult {
    /// Repositories matching the query, sorted by name.
    pub repositories: Vec<RepositoryRecord>,
    /// Visible/total counts.
    pub summary: Summary,
    /// Query that was applied.
    pub query: String,
}

/// Result from the open command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OpenResult {
    /// The repository that was opened.
    pub repository: RepositoryRecord,
}
