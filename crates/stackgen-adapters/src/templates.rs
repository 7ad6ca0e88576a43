//! Bundled template payloads and user-path resolution.
//!
//! The two builtin payloads ship inside the binary via `include_str!`, so
//! the generator works without any on-disk template directory. Any
//! non-builtin selector is a literal filesystem path, read at resolution
//! time. Payloads are opaque: resolution returns exact bytes, never parses.

use std::path::Path;

use tracing::debug;

use stackgen_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::{BuiltinTemplate, TemplateSelector},
    error::StackgenResult,
};

/// Payload for [`BuiltinTemplate::Simple`].
const SIMPLE_TEMPLATE: &str = include_str!("../templates/simple-application-template.py");

/// Payload for [`BuiltinTemplate::Multiple`].
const MULTICHAR_TEMPLATE: &str = include_str!("../templates/multichar-application-template.py");

/// Template source backed by the embedded builtin payloads, falling back
/// to the filesystem for caller-supplied paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledTemplates;

impl BundledTemplates {
    /// Create a new bundled template source.
    pub fn new() -> Self {
        Self
    }

    /// The embedded payload for a builtin template.
    pub fn builtin_payload(template: BuiltinTemplate) -> &'static str {
        match template {
            BuiltinTemplate::Simple => SIMPLE_TEMPLATE,
            BuiltinTemplate::Multiple => MULTICHAR_TEMPLATE,
        }
    }
}

impl TemplateSource for BundledTemplates {
    fn resolve(&self, selector: &TemplateSelector) -> StackgenResult<Vec<u8>> {
        match selector {
            TemplateSelector::Builtin(builtin) => {
                debug!(id = builtin.id(), "resolved builtin template");
                Ok(Self::builtin_payload(*builtin).as_bytes().to_vec())
            }
            TemplateSelector::File(path) => read_user_template(path),
        }
    }
}

/// Read a caller-supplied template file, surfacing the underlying I/O
/// error as `TemplateNotFound`.
fn read_user_template(path: &Path) -> StackgenResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| {
        ApplicationError::TemplateNotFound {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    })
}
