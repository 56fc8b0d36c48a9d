// SPDX-License-Identifier: Apache-2.0

//! Connect/query/open handlers for one interactive session.
//!
//! A [`Session`] owns the fetcher and the [`RepositoryView`]. Each handler
//! takes the triggering input and returns a fresh [`DisplayState`] for the
//! front end to draw. Errors never escape a handler: they are turned into a
//! notification and the previous collection stays in place.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::error::ReposcoutError;
use crate::github::repos::{PageTransport, RepositoryFetcher, RepositoryRecord};
use crate::view::{RepositoryView, Summary};

/// Opens a repository URL outside the process (usually a browser tab).
pub trait UrlLauncher {
    /// Launches `url`.
    fn open(&self, url: &str) -> crate::Result<()>;
}

/// Which of the two screens is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Token entry.
    Connect,
    /// Search box and repository list.
    Search,
}

/// Everything the front end needs to draw after a handler ran.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayState {
    /// Active screen.
    pub screen: Screen,
    /// Whether the connect action may be triggered.
    pub connect_enabled: bool,
    /// Whether a fetch is in flight.
    pub busy: bool,
    /// Repositories matching the current query, in display order.
    pub entries: Vec<RepositoryRecord>,
    /// Visible/total counts.
    pub summary: Summary,
    /// Transient message (errors), if any.
    pub notification: Option<String>,
}

/// Holds the busy flag up for its lifetime, including when a fetch future
/// is dropped before completing.
struct BusyGuard<'a>(&'a mut bool);

impl<'a> BusyGuard<'a> {
    fn set(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

/// Application session: fetcher, view-model and screen state.
pub struct Session<T: PageTransport> {
    fetcher: RepositoryFetcher<T>,
    view: RepositoryView,
    screen: Screen,
    busy: bool,
}

impl<T: PageTransport> Session<T> {
    /// Starts a session on the connect screen with an empty collection.
    pub fn new(fetcher: RepositoryFetcher<T>) -> Self {
        Self {
            fetcher,
            view: RepositoryView::new(),
            screen: Screen::Connect,
            busy: false,
        }
    }

    /// Read access to the view-model.
    #[must_use]
    pub fn view(&self) -> &RepositoryView {
        &self.view
    }

    /// Current display state without a notification.
    #[must_use]
    pub fn display(&self) -> DisplayState {
        self.display_with(None)
    }

    fn display_with(&self, notification: Option<String>) -> DisplayState {
        let (entries, summary) = self.view.snapshot();
        DisplayState {
            screen: self.screen,
            connect_enabled: !self.busy,
            busy: self.busy,
            entries,
            summary,
            notification,
        }
    }

    /// Fetches all repositories for `token` and switches to the search screen.
    ///
    /// An empty token is rejected before any request. On failure the
    /// previous collection and screen are kept and the error message is
    /// returned as the notification.
    #[instrument(skip(self, token))]
    pub async fn on_connect_requested(&mut self, token: &SecretString) -> DisplayState {
        if token.expose_secret().is_empty() {
            return self.display_with(Some(ReposcoutError::empty_token().to_string()));
        }

        let result = {
            let _busy = BusyGuard::set(&mut self.busy);
            self.fetcher.fetch_all_repositories(token).await
        };

        match result {
            Ok(repositories) => {
                debug!(count = repositories.len(), "Loaded repositories into view");
                self.view.set_repositories(repositories);
                self.screen = Screen::Search;
                self.display()
            }
            Err(e) => {
                warn!(error = %e, "Fetching repositories failed");
                self.display_with(Some(e.to_string()))
            }
        }
    }

    /// Re-filters the list for `text`.
    pub fn on_query_changed(&mut self, text: &str) -> DisplayState {
        self.view.set_query(text);
        self.display()
    }

    /// Opens `url` through `launcher`; failures become a notification.
    #[instrument(skip(self, launcher))]
    pub fn on_open_requested(&self, url: &str, launcher: &dyn UrlLauncher) -> DisplayState {
        match launcher.open(url) {
            Ok(()) => self.display(),
            Err(e) => {
                warn!(error = %e, "Opening repository failed");
                self.display_with(Some(e.to_string()))
            }
        }
    }
}
