//! Infrastructure adapters for stackgen.
//!
//! This crate implements the ports defined in
//! `stackgen_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod filesystem;
pub mod templates;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use templates::BundledTemplates;
