use crate::entry::{Entry, EntryKind};
use crate::error::{FsError, Result};
use chrono::{DateTime, Local};
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Snapshot of one directory's immediate children, directories first.
#[derive(Clone, Debug)]
pub struct Listing {
    pub path: PathBuf,
    pub taken_at: DateTime<Local>,
    pub entries: Vec<Entry>,
}

impl Listing {
    pub fn dir_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_dir()).count()
    }

    pub fn file_count(&self) -> usize {
        self.entries.len() - self.dir_count()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn summary(&self) -> String {
        format!("{} folders, {} files", self.dir_count(), self.file_count())
    }
}

/// Lists the immediate children of `path`.
///
/// Each kind group is sorted by plain code-point order of the name, so the
/// result is identical across platforms for the same set of names.
pub fn read_directory(path: &Path) -> Result<Listing> {
    let read_dir = fs::read_dir(path).map_err(|e| FsError::from_listing(path.to_path_buf(), &e))?;

    let mut dirs = Vec::new();
    let mut files = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| FsError::from_listing(path.to_path_buf(), &e))?;
        let name = dir_entry.file_name().to_string_lossy().into_owned();
        let entry = Entry::from_path(&dir_entry.path(), name)
            .map_err(|e| FsError::from_listing(path.to_path_buf(), &e))?;
        match entry.kind {
            EntryKind::Directory => dirs.push(entry),
            EntryKind::File => files.push(entry),
        }
    }

    dirs.sort_by(|a, b| a.name.cmp(&b.name));
    files.sort_by(|a, b| a.name.cmp(&b.name));
    dirs.append(&mut files);

    tracing::debug!(path = %path.display(), entries = dirs.len(), "listed directory");

    Ok(Listing {
        path: path.to_path_buf(),
        taken_at: Local::now(),
        entries: dirs,
    })
}

/// Formats a byte count in the largest unit whose scaled value is below 1024.
pub fn format_size(size_bytes: u64) -> String {
    let mut size = size_bytes as f64;
    for unit in &SIZE_UNITS[..SIZE_UNITS.len() - 1] {
        if size < 1024.0 {
            return format!("{:.2} {}", size, unit);
        }
        size /= 1024.0;
    }
    format!("{:.2} {}", size, SIZE_UNITS[SIZE_UNITS.len() - 1])
}

/// Renders an epoch timestamp in local time. An unusable pattern yields an empty string.
pub fn format_modified(modified_at: i64, date_format: &str) -> String {
    let Some(utc) = DateTime::from_timestamp(modified_at, 0) else {
        return String::new();
    };
    let mut text = String::new();
    match write!(text, "{}", utc.with_timezone(&Local).format(date_format)) {
        Ok(()) => text,
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::tempdir;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0.00 B");
        assert_eq!(format_size(1023), "1023.00 B");
        assert_eq!(format_size(1024), "1.00 KB");
        assert_eq!(format_size(1536), "1.50 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_size(1_073_741_824), "1.00 GB");
        assert_eq!(format_size(1u64 << 40), "1.00 TB");
        assert_eq!(format_size(2048u64 << 40), "2048.00 TB");
    }

    #[test]
    fn test_format_modified_uses_pattern() {
        let text = format_modified(0, "%Y");
        assert!(text == "1970" || text == "1969", "unexpected year {text}");
        assert_eq!(format_modified(1_700_000_000, "").len(), 0);
    }

    #[test]
    fn test_format_modified_bad_pattern_is_empty() {
        assert_eq!(format_modified(1_700_000_000, "%Y-%Q"), "");
    }

    #[test]
    fn test_directories_precede_files_sorted_by_name() {
        let dir = tempdir().unwrap();
        for name in ["beta", "Alpha", "gamma"] {
            fs::create_dir(dir.path().join(name)).unwrap();
        }
        for name in ["zeta.txt", "a.txt", "B.md"] {
            fs::write(dir.path().join(name), name).unwrap();
        }

        let listing = read_directory(dir.path()).unwrap();
        let names: Vec<&str> = listing.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "beta", "gamma", "B.md", "a.txt", "zeta.txt"]);

        let first_file = listing.entries.iter().position(|e| !e.is_dir()).unwrap();
        assert!(listing.entries[..first_file].iter().all(Entry::is_dir));
        assert!(listing.entries[first_file..].iter().all(|e| !e.is_dir()));
        assert_eq!(listing.summary(), "3 folders, 3 files");
    }

    #[test]
    fn test_listing_matches_os_children() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.txt"), "x").unwrap();
        fs::write(dir.path().join("top.txt"), "1536 bytes?").unwrap();

        let listing = read_directory(dir.path()).unwrap();
        let listed: BTreeSet<String> = listing.entries.iter().map(|e| e.name.clone()).collect();
        let expected: BTreeSet<String> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(listed, expected);
        assert_eq!(listing.get("top.txt").unwrap().size_bytes, 11);
        assert!(listing.get("deep.txt").is_none());
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempdir().unwrap();
        let listing = read_directory(dir.path()).unwrap();
        assert!(listing.entries.is_empty());
        assert_eq!(listing.summary(), "0 folders, 0 files");
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(read_directory(&missing), Err(FsError::NotFound(p)) if p == missing));
    }

    #[test]
    fn test_file_path_is_not_found() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "data").unwrap();
        assert!(matches!(read_directory(&file), Err(FsError::NotFound(_))));
    }
}
