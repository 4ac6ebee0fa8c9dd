//! HTTP client for the GitHub repository listing endpoint

use super::{Repo, RepoFetch, RepoLister};
use anyhow::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Public GitHub REST API
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// The API rejects requests without a User-Agent
const USER_AGENT: &str = concat!("inscripcion-tui/", env!("CARGO_PKG_VERSION"));

/// Client for the per-user repository listing
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GithubClient {
    /// Create a client against the default API, honoring the
    /// `INSCRIPCION_GITHUB_API` override
    pub fn new() -> Result<Self> {
        let base_url = std::env::var("INSCRIPCION_GITHUB_API")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self::with_base_url(base_url)
    }

    /// Create a client against an explicit base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl RepoLister for GithubClient {
    async fn list_public_repos(&self, username: &str) -> RepoFetch {
        let user = username.trim();
        let url = format!("{}/users/{}/repos", self.base_url, user);

        let response = match self
            .http
            .get(&url)
            .query(&[("per_page", "100"), ("sort", "updated")])
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(user, "repository listing request failed: {err}");
                return RepoFetch::network();
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::info!(user, %status, "repository listing returned an error status");
            return RepoFetch::from_status(status.as_u16());
        }

        match response.json::<Vec<Repo>>().await {
            Ok(listing) => {
                tracing::info!(user, count = listing.len(), "repository listing succeeded");
                RepoFetch::from_listing(listing)
            }
            Err(err) => {
                tracing::warn!(user, "repository listing body could not be read: {err}");
                RepoFetch::network()
            }
        }
    }
}
