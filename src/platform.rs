// Host capabilities the core depends on but does not implement itself.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

pub trait Platform {
    /// The user's home directory, if the host can report one.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Roots the user can switch between (drive letters, mount roots).
    fn volumes(&self) -> Vec<PathBuf>;

    /// Hands `path` to the host's default handler for its type.
    fn open_default(&self, path: &Path) -> io::Result<()>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NativePlatform;

impl Platform for NativePlatform {
    fn home_dir(&self) -> Option<PathBuf> {
        directories::UserDirs::new().map(|ud| ud.home_dir().to_path_buf())
    }

    #[cfg(windows)]
    fn volumes(&self) -> Vec<PathBuf> {
        ('A'..='Z')
            .map(|letter| PathBuf::from(format!("{}:\\", letter)))
            .filter(|root| root.exists())
            .collect()
    }

    #[cfg(not(windows))]
    fn volumes(&self) -> Vec<PathBuf> {
        vec![PathBuf::from("/")]
    }

    fn open_default(&self, path: &Path) -> io::Result<()> {
        open::that(path)
    }
}

/// Home directory with the same fallbacks the app uses at startup.
pub fn resolve_home(platform: &impl Platform) -> PathBuf {
    platform
        .home_dir()
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("/"))
}
