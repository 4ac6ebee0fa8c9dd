//! Login email capture, validation and resolution

mod storage;

pub use storage::{FileLoginStore, LoginStore};
#[cfg(test)]
pub use storage::MemoryLoginStore;

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Landing-page email check. Deliberately loose; the mail client is the
/// final arbiter of deliverability.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Canonical form persisted and carried through navigation
pub fn normalize_email(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Resolve the effective destination email.
///
/// A value arriving via navigation wins and is persisted for the next
/// visit; otherwise the last remembered value; otherwise empty. No
/// syntax validation here; the landing page owns that.
pub fn resolve_login_email(from_query: &str, store: &mut dyn LoginStore) -> String {
    if !from_query.is_empty() {
        store.set(from_query);
        return from_query.to_string();
    }
    store.get().unwrap_or_default()
}
