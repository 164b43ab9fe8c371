//! History persistence
//!
//! The recorder hands the full calculation list to a [`HistoryStore`] after
//! every successful evaluation. How and where it is kept is up to the store.

use crate::core::history::Calculation;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Result type for store operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised by history stores
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("History I/O error at {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The stored history could not be encoded or decoded
    #[error("History JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StorageError {
    fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Durable storage for the calculation list
pub trait HistoryStore {
    /// Replaces the stored history with `history`
    fn save(&mut self, history: &[Calculation]) -> StorageResult<()>;

    /// Returns the stored history, oldest first
    fn load(&self) -> StorageResult<Vec<Calculation>>;
}

impl<S: HistoryStore + ?Sized> HistoryStore for Box<S> {
    fn save(&mut self, history: &[Calculation]) -> StorageResult<()> {
        (**self).save(history)
    }

    fn load(&self) -> StorageResult<Vec<Calculation>> {
        (**self).load()
    }
}

/// In-memory store; counts saves so callers can observe persistence
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Vec<Calculation>,
    save_count: usize,
}

impl MemoryStore {
    /// Creates an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `history`
    #[must_use]
    pub fn with_history(history: Vec<Calculation>) -> Self {
        Self {
            saved: history,
            save_count: 0,
        }
    }

    /// Returns the last saved history
    #[must_use]
    pub fn saved(&self) -> &[Calculation] {
        &self.saved
    }

    /// Returns how many times `save` has been called
    #[must_use]
    pub const fn save_count(&self) -> usize {
        self.save_count
    }
}

impl HistoryStore for MemoryStore {
    fn save(&mut self, history: &[Calculation]) -> StorageResult<()> {
        self.saved = history.to_vec();
        self.save_count += 1;
        Ok(())
    }

    fn load(&self) -> StorageResult<Vec<Calculation>> {
        Ok(self.saved.clone())
    }
}

/// Store backed by a pretty-printed JSON array on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for `path`; nothing is touched until the first call
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryStore for JsonFileStore {
    fn save(&mut self, history: &[Calculation]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }
        let json = serde_json::to_string_pretty(history)?;
        fs::write(&self.path, json).map_err(|e| StorageError::io(&self.path, e))?;
        info!(path = %self.path.display(), entries = history.len(), "saved history");
        Ok(())
    }

    fn load(&self) -> StorageResult<Vec<Calculation>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no history file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };
        let history: Vec<Calculation> = serde_json::from_str(&json)?;
        debug!(path = %self.path.display(), entries = history.len(), "loaded history");
        Ok(history)
    }
}
