//! Log files stored in a filesystem directory

use std::{
    fs::{self, File},
    io::Write as _,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local, NaiveDateTime};

use super::{FileStore, StoreError};
use crate::log_file::LogFile;

/// Files in a single directory
#[derive(Debug, Clone)]
pub struct DirStore {
    /// Directory holding the files
    root: PathBuf,
}

impl DirStore {
    /// Build a store over an existing directory
    ///
    /// # Errors
    ///
    /// If `root` is missing or not a directory.
    pub fn new(root: &Path) -> anyhow::Result<Self> {
        anyhow::ensure!(root.is_dir(), "{root:?} missing or not a directory");
        Ok(Self {
            root: root.to_owned(),
        })
    }

    /// Store directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of a file
    fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// List the log files present in the directory, sorted, ignoring any other file
    ///
    /// # Errors
    ///
    /// If the directory or one of its entries can not be read.
    pub fn log_files(&self) -> Result<Vec<LogFile>, StoreError> {
        let dir_name = self.root.to_string_lossy();
        let mut files = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(|e| StoreError::from_io(&dir_name, e))? {
            let entry = entry.map_err(|e| StoreError::from_io(&dir_name, e))?;
            let file_name = entry.file_name();
            let file_type = entry
                .file_type()
                .map_err(|e| StoreError::from_io(&file_name.to_string_lossy(), e))?;
            if !file_type.is_file() {
                continue;
            }
            if let Some(file) = file_name.to_str().and_then(|n| n.parse::<LogFile>().ok()) {
                files.push(file);
            }
        }
        files.sort_unstable();
        Ok(files)
    }
}

impl FileStore for DirStore {
    fn exists(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    fn create(&mut self, name: &str) -> Result<(), StoreError> {
        let path = self.path(name);
        log::trace!("Creating {path:?}");
        File::options()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| StoreError::from_io(name, e))?;
        Ok(())
    }

    fn append(&mut self, name: &str, content: &str) -> Result<(), StoreError> {
        let path = self.path(name);
        log::trace!("Appending {} bytes to {path:?}", content.len());
        let mut file = File::options()
            .append(true)
            .open(&path)
            .map_err(|e| StoreError::from_io(name, e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| StoreError::from_io(name, e))
    }

    fn last_write_time(&self, name: &str) -> Result<NaiveDateTime, StoreError> {
        let metadata = fs::metadata(self.path(name)).map_err(|e| StoreError::from_io(name, e))?;
        // Same view as `exists`, other file types are not log files
        if !metadata.is_file() {
            return Err(StoreError::NotFound(name.to_owned()));
        }
        let modified = metadata
            .modified()
            .map_err(|e| StoreError::from_io(name, e))?;
        Ok(DateTime::<Local>::from(modified).naive_local())
    }

    fn rename(&mut self, old_name: &str, new_name: &str) -> Result<(), StoreError> {
        let src = self.path(old_name);
        let dst = self.path(new_name);
        // fs::rename silently replaces an existing destination
        if dst.exists() {
            return Err(StoreError::AlreadyExists(new_name.to_owned()));
        }
        log::trace!("{src:?} -> {dst:?}");
        fs::rename(&src, &dst).map_err(|e| StoreError::from_io(old_name, e))
    }
}
