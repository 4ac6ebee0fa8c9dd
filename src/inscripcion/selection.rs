//! Capacity-bounded repository selection

use crate::github::Repo;

/// Maximum repositories one submission may include
pub const SELECTION_LIMIT: usize = 2;

/// Toggle a repository in the current selection.
///
/// Already selected (by id): removed. At capacity: the selection is
/// returned unchanged; the caller is expected to disable the control
/// rather than surface an error. Otherwise appended, preserving order.
pub fn toggle_selected_repo(current: &[Repo], repo: &Repo, limit: usize) -> Vec<Repo> {
    let already_selected = current.iter().any(|item| item.id == repo.id);

    if already_selected {
        return current
            .iter()
            .filter(|item| item.id != repo.id)
            .cloned()
            .collect();
    }

    if current.len() >= limit {
        return current.to_vec();
    }

    let mut next = current.to_vec();
    next.push(repo.clone());
    next
}
