// SPDX-License-Identifier: Apache-2.0

//! List repositories command.

use reposcout_core::RepositoryView;

use super::types::ListResult;

/// Applies `query` to the loaded view.
pub fn run(mut view: RepositoryView, query: String) -> ListResult {
    view.set_query(query.clone());
    ListResult {
        repositories: view.visible_repositories(),
        summary: view.summary(),
        query,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reposcout_core::RepositoryRecord;

    fn view_of(records: Vec<RepositoryRecord>) -> RepositoryView {
        let mut view = RepositoryView::new();
        view.set_repositories(records);
        view
    }

    #[test]
    fn test_list_filters_and_counts() {
        let view = view_of(vec![
            RepositoryRecord::new("octo/cat", "https://x/octo/cat"),
            RepositoryRecord::new("acme/widget", "https://x/acme/widget"),
        ]);

        let result = run(view, "oct".to_string());
        assert_eq!(result.repositories.len(), 1);
        assert_eq!(result.repositories[0].display_name, "octo/cat");
        assert_eq!(result.summary.to_string(), "Showing 1 of 2 repositories");
    }

    #[test]
    fn test_list_without_query_is_sorted() {
        let view = view_of(vec![
            RepositoryRecord::new("Zebra/repo", "https://x/z"),
            RepositoryRecord::new("alpha/repo", "https://x/a"),
        ]);

        let result = run(view, String::new());
        let names: Vec<_> = result
            .repositories
            .iter()
            .map(|r| r.display_name.as_str())
            .collect();
        assert_eq!(names, ["alpha/repo", "Zebra/repo"]);
    }
}
