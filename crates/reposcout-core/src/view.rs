// SPDX-License-Identifier: Apache-2.0

//! Search view over the fetched repositories.
//!
//! The collection is sorted once, case-insensitively, when it is replaced;
//! every query change re-filters that same sorted list with a case-folded
//! substring match. Filtering never fails and never mutates the collection.

use std::fmt;

use serde::Serialize;

use crate::github::repos::RepositoryRecord;

/// Match count for the current query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Records matching the query.
    pub visible: usize,
    /// Records in the collection.
    pub total: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} repositories", self.visible, self.total)
    }
}

/// Owns the repository collection and the current query.
#[derive(Debug, Clone, Default)]
pub struct RepositoryView {
    all_repositories: Vec<RepositoryRecord>,
    current_query: String,
}

impl RepositoryView {
    /// Creates an empty view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the collection and resets the query.
    ///
    /// Sorting is stable, so names that compare equal once case-folded keep
    /// their fetch order.
    pub fn set_repositories(&mut self, mut repositories: Vec<RepositoryRecord>) {
        repositories.sort_by_cached_key(|r| r.display_name.to_lowercase());
        self.all_repositories = repositories;
        self.current_query.clear();
    }

    /// Stores the query verbatim.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.current_query = query.into();
    }

    /// The current query, as typed.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.current_query
    }

    /// The full sorted collection.
    #[must_use]
    pub fn repositories(&self) -> &[RepositoryRecord] {
        &self.all_repositories
    }

    /// Returns `true` if no repositories have been loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all_repositories.is_empty()
    }

    /// Iterates the sorted records whose display name contains the query,
    /// ignoring case.
    fn matching(&self) -> impl Iterator<Item = &RepositoryRecord> {
        let needle = self.current_query.to_lowercase();
        self.all_repositories
            .iter()
            .filter(move |r| r.display_name.to_lowercase().contains(&needle))
    }

    /// Records whose display name contains the query, ignoring case.
    #[must_use]
    pub fn visible_repositories(&self) -> Vec<RepositoryRecord> {
        self.matching().cloned().collect()
    }

    /// Visible and total counts for the current query.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            visible: self.matching().count(),
            total: self.all_repositories.len(),
        }
    }

    /// Matching records and their counts from a single filtering pass.
    #[must_use]
    pub fn snapshot(&self) -> (Vec<RepositoryRecord>, Summary) {
        let entries = self.visible_repositories();
        let summary = Summary {
            visible: entries.len(),
            total: self.all_repositories.len(),
        };
        (entries, summary)
    }

    /// Exact, case-insensitive lookup by `owner/name`.
    #[must_use]
    pub fn find(&self, display_name: &str) -> Option<&RepositoryRecord> {
        let wanted = display_name.to_lowercase();
        self.all_repositories
            .iter()
            .find(|r| r.display_name.to_lowercase() == wanted)
    }
}
