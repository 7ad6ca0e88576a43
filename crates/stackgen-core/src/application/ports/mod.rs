//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stackgen-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::TemplateSelector;
use crate::error::StackgenResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stackgen_adapters::filesystem::LocalFilesystem` (production)
/// - `stackgen_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StackgenResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &[u8]) -> StackgenResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a directory contains no entries.
    fn dir_is_empty(&self, path: &Path) -> StackgenResult<bool>;
}

/// Port for template payload resolution.
///
/// The engine is polymorphic over template content: payloads are opaque
/// bytes, selected and copied but never parsed.
///
/// Implemented by:
/// - `stackgen_adapters::BundledTemplates` (embedded builtins + user paths)
pub trait TemplateSource: Send + Sync {
    /// Resolve a selector to the template's exact bytes.
    fn resolve(&self, selector: &TemplateSelector) -> StackgenResult<Vec<u8>>;
}
