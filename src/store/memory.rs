//! In-memory file store for batch tests

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::StoreError;

use super::{FileRef, FileStore};

#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    files: RefCell<BTreeMap<String, Option<String>>>,
    fail_renames: bool,
}

impl MemoryStore {
    pub(crate) fn with_file(self, name: &str, content: &str) -> Self {
        self.files
            .borrow_mut()
            .insert(name.to_string(), Some(content.to_string()));
        self
    }

    pub(crate) fn with_dir(self, name: &str) -> Self {
        self.files.borrow_mut().insert(name.to_string(), None);
        self
    }

    pub(crate) fn failing_renames(mut self) -> Self {
        self.fail_renames = true;
        self
    }

    pub(crate) fn names(&self) -> Vec<String> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl FileStore for MemoryStore {
    fn list_files(&self, _dir: &Path) -> Result<Vec<FileRef>, StoreError> {
        Ok(self
            .files
            .borrow()
            .iter()
            .map(|(name, content)| FileRef {
                name: name.clone(),
                is_dir: content.is_none(),
            })
            .collect())
    }

    fn first_line(&self, _dir: &Path, file: &FileRef) -> Result<String, StoreError> {
        match self.files.borrow().get(&file.name) {
            Some(Some(content)) => content
                .lines()
                .next()
                .map(str::to_string)
                .ok_or_else(|| StoreError::Empty {
                    name: file.name.clone(),
                }),
            _ => Err(StoreError::Directory {
                name: file.name.clone(),
            }),
        }
    }

    fn rename(&self, dir: &Path, from: &str, to: &str) -> Result<(), StoreError> {
        if self.fail_renames {
            return Err(StoreError::Io {
                path: dir.join(from),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        let mut files = self.files.borrow_mut();
        if from != to && files.contains_key(to) {
            return Err(StoreError::Exists {
                name: to.to_string(),
            });
        }
        let content = files.remove(from).ok_or_else(|| StoreError::Io {
            path: dir.join(from),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })?;
        files.insert(to.to_string(), content);
        Ok(())
    }
}
