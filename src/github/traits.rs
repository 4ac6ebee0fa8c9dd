//! Trait abstraction for the repository listing client to enable mocking in tests

use super::RepoFetch;
use async_trait::async_trait;

/// Repository listing operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepoLister: Send + Sync {
    /// List a user's repositories and classify the outcome, keeping
    /// public entries only. Exactly one request per invocation; no
    /// retry, no caching, no pagination beyond the first page.
    async fn list_public_repos(&self, username: &str) -> RepoFetch;
}
