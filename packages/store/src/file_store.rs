//! # Filesystem-backed storage
//!
//! [`FileStore`] is a [`StorageBackend`] that keeps each key in its own small
//! file. It stands in for browser storage on native targets so a session
//! survives app restarts there too.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! ├── token        # bearer token
//! └── user         # user JSON
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base
//! (`~/.local/share/taskdeck/` on Linux).

use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::session::StorageBackend;

/// Filesystem-backed storage for native targets.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn path(&self, key: &str) -> PathBuf {
        // Namespaced keys contain ':' which is not portable in file names
        self.base.join(key.replace(':', "_"))
    }
}

impl StorageBackend for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(self.path(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match std::fs::remove_file(self.path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
