//! File storage backends

mod dir_store;
mod mem_store;

use std::io;

use chrono::NaiveDateTime;

pub use dir_store::DirStore;
pub use mem_store::MemoryStore;

/// Storage operation error
#[derive(thiserror::Error, Debug)]
#[expect(clippy::module_name_repetitions, reason = "re-exported at crate root")]
pub enum StoreError {
    /// File does not exist
    #[error("File {0:?} not found")]
    NotFound(String),
    /// File already exists
    #[error("File {0:?} already exists")]
    AlreadyExists(String),
    /// Other I/O failure
    #[error("I/O error on file {name:?}")]
    Io {
        /// File name
        name: String,
        /// Underlying error
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Build error from an I/O error on a named file, classifying common kinds
    pub(crate) fn from_io(name: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(name.to_owned()),
            io::ErrorKind::AlreadyExists => Self::AlreadyExists(name.to_owned()),
            _ => Self::Io {
                name: name.to_owned(),
                source: err,
            },
        }
    }
}

/// Flat namespace of text files
#[expect(clippy::module_name_repetitions, reason = "re-exported at crate root")]
pub trait FileStore {
    /// Test if a regular file exists
    fn exists(&self, name: &str) -> bool;

    /// Create an empty file
    ///
    /// # Errors
    ///
    /// [`StoreError::AlreadyExists`] if the file exists, [`StoreError::Io`] on other failures.
    fn create(&mut self, name: &str) -> Result<(), StoreError>;

    /// Append text to an existing file
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if the file is missing, [`StoreError::Io`] on write failure.
    fn append(&mut self, name: &str, content: &str) -> Result<(), StoreError>;

    /// Get file last modification time, in local time
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if there is no regular file with this name,
    /// [`StoreError::Io`] if its metadata can not be read.
    fn last_write_time(&self, name: &str) -> Result<NaiveDateTime, StoreError>;

    /// Rename file
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if `old_name` is missing, [`StoreError::AlreadyExists`] if
    /// `new_name` exists, [`StoreError::Io`] on other failures.
    fn rename(&mut self, old_name: &str, new_name: &str) -> Result<(), StoreError>;
}
