//! Depot - Content-Addressable Dependency Installation Cache
//!
//! Installs dependency sets into directories keyed by a fingerprint of
//! the dependency list, reusing an existing install whenever an identical
//! set was installed before.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod installer;
pub mod search_path;

pub use error::{DepotError, DepotResult};
