//! File store boundary
//!
//! Batch operations only see directory listings, first lines and renames,
//! so they run the same against the real filesystem and in-memory fixtures.

pub(crate) mod fs;
#[cfg(test)]
pub(crate) mod memory;

use std::path::Path;

use crate::error::StoreError;

/// One directory entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FileRef {
    pub(crate) name: String,
    pub(crate) is_dir: bool,
}

pub(crate) trait FileStore {
    /// Entries of `dir`, sorted by name
    fn list_files(&self, dir: &Path) -> Result<Vec<FileRef>, StoreError>;

    /// First line of a file, without its line terminator
    fn first_line(&self, dir: &Path, file: &FileRef) -> Result<String, StoreError>;

    fn rename(&self, dir: &Path, from: &str, to: &str) -> Result<(), StoreError>;
}

pub(crate) use fs::FsStore;
