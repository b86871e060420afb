//! Cache entry paths and state
//!
//! Maps a dependency list to its content-addressed install directory and
//! probes the directory's state. Path composition is pure; probing and
//! listing only ever read the filesystem.

use crate::cache::fingerprint::{deps_fingerprint, is_fingerprint};
use crate::config;
use crate::error::{DepotError, DepotResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectory of the base directory holding all cache entries
pub const DEPS_DIR: &str = "deps";

/// State of a cache entry
///
/// A present-but-empty directory counts as `Absent`: a crashed install may
/// leave one behind, and it holds nothing worth reusing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheState {
    /// No directory, or an empty one (installable)
    Absent,
    /// Directory exists and has contents (reusable, never rewritten)
    Populated,
}

impl CacheState {
    /// Probe the state of an entry directory
    pub fn probe(path: &Path) -> Self {
        match fs::read_dir(path) {
            Ok(mut entries) => {
                if entries.next().is_some() {
                    Self::Populated
                } else {
                    Self::Absent
                }
            }
            Err(_) => Self::Absent,
        }
    }
}

impl fmt::Display for CacheState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => write!(f, "absent"),
            Self::Populated => write!(f, "populated"),
        }
    }
}

/// Compose the install path for a dependency list under a base directory
pub fn install_path(deps: &[String], base_dir: &Path) -> PathBuf {
    base_dir.join(DEPS_DIR).join(deps_fingerprint(deps))
}

/// Resolve the install path, falling back to the default base directory
///
/// Fails with [`DepotError::BaseDirUnresolved`] when no base directory is
/// given and none can be determined from the environment.
pub fn resolve_install_path(deps: &[String], base_dir: Option<&Path>) -> DepotResult<PathBuf> {
    let base = match base_dir {
        Some(dir) => dir.to_path_buf(),
        None => config::default_base_dir()?,
    };
    Ok(install_path(deps, &base))
}

/// A cache entry found on disk
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The fingerprint (directory name)
    pub fingerprint: String,
    /// Full path to the entry directory
    pub path: PathBuf,
    /// Probed state
    pub state: CacheState,
    /// Filesystem modification time, if available
    pub modified_at: Option<DateTime<Utc>>,
}

/// List all cache entries under a base directory
///
/// Only directories whose names look like fingerprints are reported; a
/// missing deps directory yields an empty list.
pub fn list_entries(base_dir: &Path) -> DepotResult<Vec<CacheEntry>> {
    let deps_dir = base_dir.join(DEPS_DIR);
    if !deps_dir.exists() {
        return Ok(Vec::new());
    }

    let read = fs::read_dir(&deps_dir)
        .map_err(|e| DepotError::io(format!("reading cache dir {}", deps_dir.display()), e))?;

    let mut entries = Vec::new();
    for item in read {
        let item =
            item.map_err(|e| DepotError::io(format!("reading cache dir {}", deps_dir.display()), e))?;
        let path = item.path();
        let name = item.file_name().to_string_lossy().into_owned();

        if !path.is_dir() || !is_fingerprint(&name) {
            continue;
        }

        let modified_at = item
            .metadata()
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Utc>::from);

        entries.push(CacheEntry {
            state: CacheState::probe(&path),
            fingerprint: name,
            path,
            modified_at,
        });
    }

    entries.sort_by(|a, b| a.fingerprint.cmp(&b.fingerprint));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn specs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn install_path_shape() {
        let base = Path::new("/tmp/depot-base");
        let path = install_path(&specs(&["requests"]), base);

        assert!(path.starts_with("/tmp/depot-base/deps"));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert_eq!(name.len(), 64);
    }

    #[test]
    fn install_path_order_independent() {
        let base = Path::new("/tmp/depot-base");
        let a = install_path(&specs(&["b", "a"]), base);
        let b = install_path(&specs(&["a", "b"]), base);
        assert_eq!(a, b);
    }

    #[test]
    fn resolve_with_explicit_base() {
        let dir = TempDir::new().unwrap();
        let path = resolve_install_path(&specs(&["requests"]), Some(dir.path())).unwrap();
        assert!(path.starts_with(dir.path()));
    }

    #[test]
    fn probe_missing_is_absent() {
        let dir = TempDir::new().unwrap();
        let state = CacheState::probe(&dir.path().join("nope"));
        assert_eq!(state, CacheState::Absent);
    }

    #[test]
    fn probe_empty_is_absent() {
        let dir = TempDir::new().unwrap();
        let entry = dir.path().join("entry");
        fs::create_dir(&entry).unwrap();
        assert_eq!(CacheState::probe(&entry), CacheState::Absent);
    }

    #[test]
    fn probe_nonempty_is_populated() {
        let dir = TempDir::new().unwrap();
        let entry = dir.path().join("entry");
        fs::create_dir(&entry).unwrap();
        fs::write(entry.join("pkg.py"), "x = 1").unwrap();
        assert_eq!(CacheState::probe(&entry), CacheState::Populated);
    }

    #[test]
    fn list_entries_empty_base() {
        let dir = TempDir::new().unwrap();
        let entries = list_entries(dir.path()).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn list_entries_skips_non_fingerprint_names() {
        let dir = TempDir::new().unwrap();
        let deps = dir.path().join(DEPS_DIR);
        fs::create_dir_all(deps.join("tmp-staging")).unwrap();

        let good = deps.join("a".repeat(64));
        fs::create_dir(&good).unwrap();
        fs::write(good.join("marker"), "").unwrap();

        let entries = list_entries(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].fingerprint, "a".repeat(64));
        assert_eq!(entries[0].state, CacheState::Populated);
    }

    #[test]
    fn list_entries_reports_empty_entry_as_absent() {
        let dir = TempDir::new().unwrap();
        let deps = dir.path().join(DEPS_DIR);
        fs::create_dir_all(deps.join("b".repeat(64))).unwrap();

        let entries = list_entries(dir.path()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].state, CacheState::Absent);
    }
}
