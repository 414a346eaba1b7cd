use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use glob::Pattern;

use crate::error::StoreError;

use super::{FileRef, FileStore};

/// Longest first line read before giving up on a file
const MAX_LINE_BYTES: u64 = 64 * 1024;

/// Filesystem-backed store, optionally restricted to names matching a glob
#[derive(Debug, Default)]
pub(crate) struct FsStore {
    pattern: Option<Pattern>,
}

impl FsStore {
    pub(crate) fn new(pattern: Option<&str>) -> Result<Self, StoreError> {
        let pattern = pattern
            .map(|p| {
                Pattern::new(p).map_err(|source| StoreError::Pattern {
                    pattern: p.to_string(),
                    source,
                })
            })
            .transpose()?;
        Ok(FsStore { pattern })
    }

    fn accepts(&self, name: &str) -> bool {
        self.pattern.as_ref().is_none_or(|p| p.matches(name))
    }
}

impl FileStore for FsStore {
    fn list_files(&self, dir: &Path) -> Result<Vec<FileRef>, StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        };
        let mut files = Vec::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let entry = entry.map_err(io_err)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if !self.accepts(&name) {
                continue;
            }
            let is_dir = entry.file_type().map_err(io_err)?.is_dir();
            files.push(FileRef { name, is_dir });
        }
        files.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(files)
    }

    fn first_line(&self, dir: &Path, file: &FileRef) -> Result<String, StoreError> {
        if file.is_dir {
            return Err(StoreError::Directory {
                name: file.name.clone(),
            });
        }
        let path = dir.join(&file.name);
        let io_err = |source: std::io::Error| StoreError::Io {
            path: path.clone(),
            source,
        };
        let file_handle = File::open(&path).map_err(io_err)?;
        let mut reader = BufReader::new(file_handle).take(MAX_LINE_BYTES);
        let mut buf = Vec::new();
        let read = reader.read_until(b'\n', &mut buf).map_err(io_err)?;
        if read == 0 {
            return Err(StoreError::Empty {
                name: file.name.clone(),
            });
        }
        if read as u64 == MAX_LINE_BYTES && buf.last() != Some(&b'\n') {
            return Err(StoreError::LineTooLong {
                name: file.name.clone(),
                limit: MAX_LINE_BYTES,
            });
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
        // Each invalid byte becomes one replacement char, so positions
        // in single-byte encoded lines stay put.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Never replaces an existing entry; renaming a file to its own name is a no-op
    fn rename(&self, dir: &Path, from: &str, to: &str) -> Result<(), StoreError> {
        let source = dir.join(from);
        let target = dir.join(to);
        if from != to && target.symlink_metadata().is_ok() {
            return Err(StoreError::Exists {
                name: to.to_string(),
            });
        }
        fs::rename(&source, target).map_err(|e| StoreError::Io {
            path: source,
            source: e,
        })
    }
}
