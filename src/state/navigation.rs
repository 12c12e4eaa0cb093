// Navigation state - the single current location
use std::path::{Path, PathBuf};

/// Current path driving what is displayed. No history is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    current_path: PathBuf,
}

impl NavigationState {
    pub fn new(start_path: PathBuf) -> Self {
        Self {
            current_path: start_path,
        }
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Swaps in a new path wholesale and hands back the old one.
    pub fn replace(&mut self, path: PathBuf) -> PathBuf {
        std::mem::replace(&mut self.current_path, path)
    }

    /// Parent of the current path, or `None` at a root.
    pub fn parent(&self) -> Option<PathBuf> {
        self.current_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
    }
}
