use std::fs::{self, Metadata};
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Directory/File discriminator used for sorting, navigation and delete strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Directory,
    File,
}

/// One filesystem object as seen in a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntryKind,
    /// Zero for directories.
    pub size_bytes: u64,
    /// Seconds since the Unix epoch; negative for pre-epoch timestamps.
    pub modified_at: i64,
}

impl Entry {
    /// Stats `path` and builds an entry named `name`.
    ///
    /// The kind follows symlinks. A dangling link falls back to the link's own
    /// metadata and is reported as a file.
    pub fn from_path(path: &Path, name: String) -> std::io::Result<Self> {
        let metadata = match fs::metadata(path) {
            Ok(md) => md,
            Err(_) => fs::symlink_metadata(path)?,
        };
        Ok(Self::from_metadata(name, &metadata))
    }

    pub fn from_metadata(name: String, metadata: &Metadata) -> Self {
        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        let size_bytes = match kind {
            EntryKind::Directory => 0,
            EntryKind::File => metadata.len(),
        };

        Self {
            name,
            kind,
            size_bytes,
            modified_at: modified_secs(metadata),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn get_icon(&self) -> &str {
        match self.kind {
            EntryKind::Directory => "📁",
            EntryKind::File => "📄",
        }
    }
}

fn modified_secs(metadata: &Metadata) -> i64 {
    let Ok(modified) = metadata.modified() else {
        return 0;
    };
    match modified.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    }
}
