mod directory;
mod ops;

pub use directory::{format_modified, format_size, read_directory, Listing};
pub use ops::{child_path, create_directory, delete_entry};
