use crate::error::{FsError, Result};
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Resolves `name` as a direct child of `dir`.
///
/// Rejects anything that is not exactly one normal path component.
pub fn child_path(dir: &Path, name: &str) -> io::Result<PathBuf> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !name.contains(std::path::is_separator) => {
            Ok(dir.join(name))
        }
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("invalid entry name: {:?}", name),
        )),
    }
}

/// Creates `dir/name` as a new, empty directory.
pub fn create_directory(dir: &Path, name: &str) -> Result<PathBuf> {
    let new_dir = child_path(dir, name).map_err(|source| FsError::CreateFailed {
        path: dir.join(name),
        source,
    })?;

    fs::create_dir(&new_dir).map_err(|source| FsError::CreateFailed {
        path: new_dir.clone(),
        source,
    })?;
    tracing::info!(path = %new_dir.display(), "created folder");
    Ok(new_dir)
}

/// Removes `dir/name`. Directories must be empty; files are removed unconditionally.
pub fn delete_entry(dir: &Path, name: &str) -> Result<PathBuf> {
    let target = child_path(dir, name).map_err(|source| FsError::DeleteFailed {
        path: dir.join(name),
        source,
    })?;

    let removed = fs::symlink_metadata(&target).and_then(|md| {
        if md.is_dir() {
            fs::remove_dir(&target)
        } else {
            fs::remove_file(&target)
        }
    });
    removed.map_err(|source| FsError::DeleteFailed {
        path: target.clone(),
        source,
    })?;

    tracing::info!(path = %target.display(), "deleted entry");
    Ok(target)
}
