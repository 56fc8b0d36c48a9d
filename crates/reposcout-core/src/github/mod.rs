// SPDX-License-Identifier: Apache-2.0

//! GitHub integration module.
//!
//! Provides token resolution and the paginated repository listing.

pub mod auth;
pub mod repos;

/// `User-Agent` sent with every API request (GitHub rejects requests without one).
pub const USER_AGENT: &str = concat!("reposcout/", env!("CARGO_PKG_VERSION"));

/// Media type requested from the REST API.
pub const ACCEPT_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Token scopes needed to see private and organization repositories.
pub const REQUIRED_SCOPES: &[&str] = &["repo", "read:org"];
