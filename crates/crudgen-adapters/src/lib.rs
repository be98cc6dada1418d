//! Infrastructure adapters for crudgen.
//!
//! This crate implements the ports defined in `crudgen-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
