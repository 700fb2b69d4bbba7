//! In-memory file store

use std::collections::BTreeMap;

use chrono::NaiveDateTime;

use super::{FileStore, StoreError};

/// In-memory file
#[derive(Debug, Clone)]
struct MemFile {
    /// Text content
    content: String,
    /// Last modification time
    modified: NaiveDateTime,
}

/// Files kept in memory, stamped with a settable current time
#[derive(Debug, Clone)]
pub struct MemoryStore {
    /// Files by name
    files: BTreeMap<String, MemFile>,
    /// Time recorded on create and append
    now: NaiveDateTime,
}

impl MemoryStore {
    /// Build an empty store, writes will be stamped with `now`
    #[must_use]
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            files: BTreeMap::new(),
            now,
        }
    }

    /// Change the time stamped on subsequent writes
    pub fn set_now(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    /// Add or replace a file with given content and modification time
    pub fn insert(&mut self, name: &str, content: &str, modified: NaiveDateTime) {
        self.files.insert(
            name.to_owned(),
            MemFile {
                content: content.to_owned(),
                modified,
            },
        );
    }

    /// Get file content
    #[must_use]
    pub fn content(&self, name: &str) -> Option<&str> {
        self.files.get(name).map(|f| f.content.as_str())
    }

    /// Names of all files, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

impl FileStore for MemoryStore {
    fn exists(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    fn create(&mut self, name: &str) -> Result<(), StoreError> {
        if self.files.contains_key(name) {
            return Err(StoreError::AlreadyExists(name.to_owned()));
        }
        self.insert(name, "", self.now);
        Ok(())
    }

    fn append(&mut self, name: &str, content: &str) -> Result<(), StoreError> {
        let file = self
            .files
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.to_owned()))?;
        file.content.push_str(content);
        file.modified = self.now;
        Ok(())
    }

    fn last_write_time(&self, name: &str) -> Result<NaiveDateTime, StoreError> {
        self.files
            .get(name)
            .map(|f| f.modified)
            .ok_or_else(|| StoreError::NotFound(name.to_owned()))
    }

    fn rename(&mut self, old_name: &str, new_name: &str) -> Result<(), StoreError> {
        if self.files.contains_key(new_name) {
            return Err(StoreError::AlreadyExists(new_name.to_owned()));
        }
        let file = self
            .files
            .remove(old_name)
            .ok_or_else(|| StoreError::NotFound(old_name.to_owned()))?;
        self.files.insert(new_name.to_owned(), file);
        Ok(())
    }
}
