//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `crudgen-adapters` crate provides implementations.

use crate::error::CrudgenResult;
use std::path::Path;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `crudgen_adapters::filesystem::LocalFilesystem` (production)
/// - `crudgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// ## Design Notes
///
/// - `create_dir` creates exactly one level; the scaffold service creates
///   parents before children, so a missing parent is an error, not something
///   to paper over
/// - `write_file` replaces existing content; existence policy is the
///   service's job, not the adapter's
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a single directory. Fails if the parent does not exist.
    fn create_dir(&self, path: &Path) -> CrudgenResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> CrudgenResult<()>;

    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;
}
