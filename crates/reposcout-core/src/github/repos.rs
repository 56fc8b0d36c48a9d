// SPDX-License-Identifier: Apache-2.0

//! Repository listing for the authenticated user.
//!
//! Requests `/user/repos` for every affiliation (owner, collaborator,
//! organization member) at the maximum page size and follows the `Link`
//! header's `rel="next"` target until GitHub stops sending one. A single
//! failed page aborts the whole fetch; there are no retries.
//!
//! The HTTP exchange sits behind [`PageTransport`] so the pagination loop
//! can run against a scripted transport in tests.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue, LINK};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::{ACCEPT_MEDIA_TYPE, USER_AGENT};
use crate::config::{GitHubConfig, MAX_PER_PAGE};
use crate::error::ReposcoutError;

/// Affiliations requested from the listing endpoint.
const AFFILIATIONS: &str = "owner,collaborator,organization_member";

/// A repository reduced to what the search view needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryRecord {
    /// The `owner/name` identifier.
    #[serde(rename = "full_name")]
    pub display_name: String,
    /// Absolute URL of the repository's web page.
    #[serde(rename = "html_url")]
    pub web_url: String,
}

impl RepositoryRecord {
    /// Creates a record from its display name and web URL.
    pub fn new(display_name: impl Into<String>, web_url: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            web_url: web_url.into(),
        }
    }
}

/// Wire shape of one entry in a `/user/repos` page. Other fields are ignored.
#[derive(Debug, Deserialize)]
struct RawRepository {
    full_name: String,
    html_url: String,
}

impl From<RawRepository> for RepositoryRecord {
    fn from(raw: RawRepository) -> Self {
        Self {
            display_name: raw.full_name,
            web_url: raw.html_url,
        }
    }
}

/// One page as returned by a [`PageTransport`].
#[derive(Debug, Clone)]
pub struct PageResponse {
    /// HTTP status code.
    pub status: u16,
    /// Target of the `rel="next"` link, if any.
    pub next: Option<String>,
    /// Raw response body.
    pub body: String,
}

/// Performs a single authenticated page request.
#[async_trait]
pub trait PageTransport: Send + Sync {
    /// Fetches `url` with `token` as the credential.
    ///
    /// Returns `Err` only when the request could not be completed at all;
    /// non-success statuses come back as a [`PageResponse`].
    async fn get_page(&self, url: &str, token: &SecretString) -> crate::Result<PageResponse>;
}

/// `reqwest`-backed transport talking to the real API.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Builds the HTTP client. `timeout` of `None` keeps reqwest's default.
    pub fn new(timeout: Option<Duration>) -> crate::Result<Self> {
        Ok(Self {
            client: build_client(USER_AGENT, timeout)?,
        })
    }
}

/// Builds the client; failures are local setup problems, not network errors.
fn build_client(user_agent: &str, timeout: Option<Duration>) -> crate::Result<Client> {
    let mut builder = Client::builder().user_agent(user_agent);
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|e| ReposcoutError::Config {
        message: format!("could not initialise the HTTP client: {e}"),
    })
}

#[async_trait]
impl PageTransport for HttpTransport {
    async fn get_page(&self, url: &str, token: &SecretString) -> crate::Result<PageResponse> {
        let mut auth = HeaderValue::from_str(&format!("token {}", token.expose_secret()))
            .map_err(|_| ReposcoutError::Validation {
                message: "The access token contains characters that are not allowed in an HTTP header"
                    .to_string(),
            })?;
        auth.set_sensitive(true);

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, auth)
            .header(ACCEPT, ACCEPT_MEDIA_TYPE)
            .send()
            .await?;

        let status = response.status().as_u16();
        let next = response
            .headers()
            .get(LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(next_link);
        let body = response.text().await?;

        Ok(PageResponse { status, next, body })
    }
}

/// Extracts the `rel="next"` target from a `Link` header value.
///
/// Targets are delimited by `<` and `>` so commas inside URLs
/// (such as the affiliation list) do not split entries.
#[must_use]
pub fn next_link(header: &str) -> Option<String> {
    let mut rest = header;
    while let Some(start) = rest.find('<') {
        let after = &rest[start + 1..];
        let end = after.find('>')?;
        let target = &after[..end];
        let tail = &after[end + 1..];
        let params = tail.find('<').map_or(tail, |i| &tail[..i]);

        let is_next = params
            .split(';')
            .filter_map(|param| {
                param
                    .trim()
                    .trim_end_matches(',')
                    .trim()
                    .strip_prefix("rel=")
            })
            .any(|rel| {
                rel.trim_matches('"')
                    .split_whitespace()
                    .any(|r| r.eq_ignore_ascii_case("next"))
            });
        if is_next {
            return Some(target.to_string());
        }

        rest = &tail[params.len()..];
    }
    None
}

/// Fetches every repository visible to a token.
#[derive(Debug, Clone)]
pub struct RepositoryFetcher<T = HttpTransport> {
    transport: T,
    api_base: String,
    per_page: u8,
    max_pages: usize,
}

impl RepositoryFetcher<HttpTransport> {
    /// Creates a fetcher using the real HTTP transport.
    pub fn from_config(config: &GitHubConfig) -> crate::Result<Self> {
        let transport = HttpTransport::new(config.api_timeout_seconds.map(Duration::from_secs))?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: PageTransport> RepositoryFetcher<T> {
    /// Creates a fetcher over an arbitrary transport.
    pub fn with_transport(transport: T, config: &GitHubConfig) -> Self {
        Self {
            transport,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            per_page: config.per_page.clamp(1, MAX_PER_PAGE),
            max_pages: config.max_pages.max(1),
        }
    }

    /// The underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// URL of the first listing page.
    #[must_use]
    pub fn initial_url(&self) -> String {
        format!(
            "{}/user/repos?affiliation={AFFILIATIONS}&per_page={}",
            self.api_base, self.per_page
        )
    }

    /// Fetches all pages and returns their records in page order.
    ///
    /// # Errors
    ///
    /// - `Validation` for an empty token (no request is made)
    /// - `Auth` for 401/403, `Api` for any other non-success status
    /// - `Network` when a request cannot be completed
    /// - `InvalidResponse` when a body is not a repository array
    /// - `Pagination` when a `next` link revisits a page or the page ceiling is hit
    #[instrument(skip(self, token), fields(api_base = %self.api_base))]
    pub async fn fetch_all_repositories(
        &self,
        token: &SecretString,
    ) -> crate::Result<Vec<RepositoryRecord>> {
        if token.expose_secret().is_empty() {
            return Err(ReposcoutError::empty_token());
        }

        let mut repositories = Vec::new();
        let mut visited = HashSet::new();
        let mut next = Some(self.initial_url());

        while let Some(url) = next.take() {
            if visited.contains(&url) {
                warn!(url = %url, "next link points to an already fetched page");
                return Err(ReposcoutError::Pagination {
                    url,
                    reason: "next link points to an already fetched page".to_string(),
                });
            }
            if visited.len() >= self.max_pages {
                warn!(max_pages = self.max_pages, "page ceiling reached");
                return Err(ReposcoutError::Pagination {
                    url,
                    reason: format!("more than {} pages", self.max_pages),
                });
            }
            visited.insert(url.clone());

            let page = self.transport.get_page(&url, token).await?;
            if !(200..300).contains(&page.status) {
                warn!(status = page.status, url = %url, "repository page request failed");
                return Err(ReposcoutError::from_status(page.status));
            }

            let entries: Vec<RawRepository> =
                serde_json::from_str(&page.body).map_err(ReposcoutError::InvalidResponse)?;
            debug!(
                page = visited.len(),
                count = entries.len(),
                has_next = page.next.is_some(),
                "Fetched repository page"
            );
            repositories.extend(entries.into_iter().map(RepositoryRecord::from));
            next = page.next;
        }

        info!(
            count = repositories.len(),
            pages = visited.len(),
            "Fetched all repositories"
        );
        Ok(repositories)
    }
}
