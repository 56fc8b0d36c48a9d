// SPDX-License-Identifier: Apache-2.0

//! Open a repository in the browser by name.

use anyhow::Result;
use reposcout_core::{RepositoryView, UrlLauncher};
use tracing::info;

use super::types::OpenResult;

/// How many partial matches to suggest when the name is not found.
const MAX_SUGGESTIONS: usize = 5;

/// Finds `name` (exact, case-insensitive) and launches its web page.
pub fn run(view: &RepositoryView, name: &str, launcher: &dyn UrlLauncher) -> Result<OpenResult> {
    let Some(repository) = view.find(name) else {
        let mut view = view.clone();
        view.set_query(name);
        let suggestions: Vec<_> = view
            .visible_repositories()
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|r| r.display_name)
            .collect();

        if suggestions.is_empty() {
            anyhow::bail!("No repository named '{name}' is visible to this token");
        }
        anyhow::bail!(
            "No repository named '{name}' is visible to this token.\nDid you mean: {}",
            suggestions.join(", ")
        );
    };

    launcher.open(&repository.web_url)?;
    info!(repository = %repository.display_name, "Opened repository");

    Ok(OpenResult {
        repository: repository.clone(),
    })
}
