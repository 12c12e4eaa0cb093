use super::navigation::NavigationState;
use crate::error::{FsError, Result};
use crate::io::{self, Listing};
use crate::platform::{resolve_home, Platform};
use std::path::{Path, PathBuf};

/// What `enter` did with the chosen child.
#[derive(Debug)]
pub enum EnterOutcome {
    /// The child was a directory and is now the current path.
    Listed(Listing),
    /// The child was handed to the host's default handler; the path is unchanged.
    Opened(PathBuf),
}

/// Applies navigation commands to the current path and relists after each one.
///
/// A failed listing leaves the new path in place unless rollback was enabled
/// with [`Navigator::with_rollback`].
pub struct Navigator<P: Platform> {
    state: NavigationState,
    platform: P,
    home: PathBuf,
    rollback_on_failure: bool,
}

impl<P: Platform> Navigator<P> {
    /// Starts at the user's home directory, resolved once here.
    pub fn new(platform: P) -> Self {
        let home = resolve_home(&platform);
        Self {
            state: NavigationState::new(home.clone()),
            platform,
            home,
            rollback_on_failure: false,
        }
    }

    pub fn with_rollback(mut self, enabled: bool) -> Self {
        self.rollback_on_failure = enabled;
        self
    }

    pub fn current_path(&self) -> &Path {
        self.state.current_path()
    }

    pub fn home_path(&self) -> &Path {
        &self.home
    }

    pub fn volumes(&self) -> Vec<PathBuf> {
        self.platform.volumes()
    }

    /// Relists the current path without moving.
    pub fn refresh(&self) -> Result<Listing> {
        io::read_directory(self.state.current_path())
    }

    pub fn enter(&mut self, name: &str) -> Result<EnterOutcome> {
        let target = io::child_path(self.state.current_path(), name)
            .map_err(|_| FsError::NotFound(self.state.current_path().join(name)))?;

        if target.is_dir() {
            return self.transition(target).map(EnterOutcome::Listed);
        }

        if let Err(e) = self.platform.open_default(&target) {
            tracing::warn!(path = %target.display(), error = %e, "default handler failed");
        }
        Ok(EnterOutcome::Opened(target))
    }

    /// Moves to the parent directory. At a root the path stays put.
    pub fn up(&mut self) -> Result<Listing> {
        match self.state.parent() {
            Some(parent) => self.transition(parent),
            None => self.refresh(),
        }
    }

    pub fn home(&mut self) -> Result<Listing> {
        self.transition(self.home.clone())
    }

    /// Takes `path` verbatim; a bad path only surfaces as a listing error.
    pub fn set_path(&mut self, path: impl Into<PathBuf>) -> Result<Listing> {
        self.transition(path.into())
    }

    /// Switches to another volume root.
    pub fn change_root(&mut self, root: impl Into<PathBuf>) -> Result<Listing> {
        self.set_path(root)
    }

    pub fn create_folder(&mut self, name: &str) -> Result<Listing> {
        io::create_directory(self.state.current_path(), name)?;
        self.refresh()
    }

    /// Deletes a child of the current path. Callers confirm with the user first.
    pub fn delete(&mut self, name: &str) -> Result<Listing> {
        io::delete_entry(self.state.current_path(), name)?;
        self.refresh()
    }

    fn transition(&mut self, path: PathBuf) -> Result<Listing> {
        let previous = self.state.replace(path);
        match self.refresh() {
            Ok(listing) => Ok(listing),
            Err(e) => {
                tracing::warn!(error = %e, "listing failed after navigation");
                if self.rollback_on_failure {
                    self.state.replace(previous);
                }
                Err(e)
            }
        }
    }
}
