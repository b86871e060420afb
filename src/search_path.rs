//! Package search-path registration
//!
//! An ordered list of directories consulted when resolving importable
//! package code. Owned by the caller and passed explicitly rather than
//! mutated as ambient global state, so registration order and presence
//! stay independently testable.
//!
//! Registration prepends, so a freshly installed entry wins over whatever
//! the runtime already had on its path.

use crate::error::{DepotError, DepotResult};
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Ordered set of package search directories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    /// Create an empty search path
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from existing entries, keeping their order
    pub fn from_entries(entries: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Parse a platform path-list value (e.g. the contents of `PYTHONPATH`)
    pub fn from_env(value: &OsStr) -> Self {
        Self {
            entries: std::env::split_paths(value).collect(),
        }
    }

    /// Register a directory at the front of the search path
    ///
    /// No-op when an entry already matches exactly; there is no
    /// canonicalization, the comparison is on the literal path. Returns
    /// whether the path was inserted.
    pub fn register(&mut self, path: impl Into<PathBuf>) -> bool {
        let path = path.into();
        if self.entries.contains(&path) {
            return false;
        }
        self.entries.insert(0, path);
        true
    }

    /// Whether the exact path is present
    pub fn contains(&self, path: &Path) -> bool {
        self.entries.iter().any(|p| p == path)
    }

    /// The entries in search order
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the search path is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as a platform path-list value for a child-process environment
    pub fn to_env_value(&self) -> DepotResult<OsString> {
        std::env::join_paths(&self.entries)
            .map_err(|e| DepotError::io("joining search path", std::io::Error::other(e)))
    }
}
