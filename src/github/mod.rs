//! GitHub repository listing: API schema, outcome classification and the
//! HTTP client behind a mockable trait.

mod client;
mod traits;

pub use client::{GithubClient, DEFAULT_API_URL};
#[cfg(test)]
pub use traits::MockRepoLister;
pub use traits::RepoLister;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// One repository as returned by the per-user listing endpoint.
///
/// Identity is `id`: two values with the same id are the same repository
/// even when the API returns refreshed metadata between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    pub html_url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub language: String,
    pub stargazers_count: u32,
    pub private: bool,
}

/// The API sends `null` for missing descriptions and languages
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// User-facing fetch error taxonomy. All recoverable by user action;
/// `NoPublicRepos` is the one soft error paired with a usable empty list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("Usuario de GitHub no encontrado.")]
    UserNotFound,
    #[error("Error al consultar. Intente nuevamente.")]
    RequestFailed,
    #[error("Error de red. Verifique su conexión.")]
    Network,
    #[error("Sin repositorios públicos. Debe tener al menos 1.")]
    NoPublicRepos,
}

/// Classified outcome of one listing request.
///
/// `repos` is `None` when no usable list was obtained at all, and
/// `Some(vec![])` when the user exists but has no public repository.
#[derive(Debug, Clone)]
pub struct RepoFetch {
    pub repos: Option<Vec<Repo>>,
    pub error: Option<FetchError>,
}

impl RepoFetch {
    /// The request never completed
    pub fn network() -> Self {
        Self {
            repos: None,
            error: Some(FetchError::Network),
        }
    }

    /// The request completed with a non-success status
    pub fn from_status(status: u16) -> Self {
        let error = if status == 404 {
            FetchError::UserNotFound
        } else {
            FetchError::RequestFailed
        };
        Self {
            repos: None,
            error: Some(error),
        }
    }

    /// The request succeeded; keep public repositories only
    pub fn from_listing(all: Vec<Repo>) -> Self {
        let public: Vec<Repo> = all.into_iter().filter(|repo| !repo.private).collect();
        if public.is_empty() {
            Self {
                repos: Some(public),
                error: Some(FetchError::NoPublicRepos),
            }
        } else {
            Self {
                repos: Some(public),
                error: None,
            }
        }
    }
}
