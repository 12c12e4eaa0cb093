use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FsError>;

#[derive(Debug, Error)]
pub enum FsError {
    #[error("Directory not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("Failed to create folder: {}", path.display())]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to delete {}: {source}", path.display())]
    DeleteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Classifies a failure to enumerate `path`.
    pub fn from_listing(path: PathBuf, err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path),
            _ => Self::NotFound(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_error_mapping() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        let missing = io::Error::from(io::ErrorKind::NotFound);
        let other = io::Error::other("device gone");

        assert!(matches!(
            FsError::from_listing("/x".into(), &denied),
            FsError::PermissionDenied(_)
        ));
        assert!(matches!(
            FsError::from_listing("/x".into(), &missing),
            FsError::NotFound(_)
        ));
        assert!(matches!(
            FsError::from_listing("/x".into(), &other),
            FsError::NotFound(_)
        ));
    }

    #[test]
    fn test_messages_name_the_path() {
        let err = FsError::PermissionDenied("/root/secret".into());
        assert_eq!(err.to_string(), "Permission denied: /root/secret");

        let err = FsError::DeleteFailed {
            path: "/tmp/full".into(),
            source: io::Error::other("directory not empty"),
        };
        assert_eq!(err.to_string(), "Failed to delete /tmp/full: directory not empty");
    }
}
