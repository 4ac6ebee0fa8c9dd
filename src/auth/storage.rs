//! Single-slot persistence for the last-known login email

use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// One-slot storage behind the email resolver. Injected so the resolver
/// is testable without touching the real data directory.
pub trait LoginStore {
    fn get(&self) -> Option<String>;
    fn set(&mut self, email: &str);
}

/// File-backed store under the platform data directory
pub struct FileLoginStore {
    path: Option<PathBuf>,
}

impl FileLoginStore {
    pub fn new() -> Self {
        Self {
            path: Self::default_path(),
        }
    }

    /// Store backed by an explicit file path
    #[allow(dead_code)]
    pub fn at(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("bo", "bancobisa", "inscripcion-tui")
            .map(|dirs| dirs.data_dir().join("login_email"))
    }
}

impl Default for FileLoginStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginStore for FileLoginStore {
    fn get(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        let contents = fs::read_to_string(path).ok()?;
        let email = contents.trim().to_string();
        if email.is_empty() {
            None
        } else {
            Some(email)
        }
    }

    fn set(&mut self, email: &str) {
        // Losing the remembered email only costs a re-login; log and move on
        let Some(path) = self.path.as_ref() else {
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!("could not create login store directory: {err}");
                return;
            }
        }
        if let Err(err) = fs::write(path, email) {
            tracing::warn!("could not persist login email: {err}");
        }
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryLoginStore(Option<String>);

#[cfg(test)]
impl LoginStore for MemoryLoginStore {
    fn get(&self) -> Option<String> {
        self.0.clone()
    }

    fn set(&mut self, email: &str) {
        self.0 = Some(email.to_string());
    }
}
