//! Template selection.
//!
//! A selector is either one of the enumerated builtin identifiers or an
//! arbitrary filesystem path. Parsing never fails: anything that is not a
//! known builtin id is treated as a path, and path errors surface later
//! when the template is resolved.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// Templates bundled with the generator.
///
/// Each maps to a payload file shipped alongside the adapters crate. The
/// generator never inspects payload content; templates are opaque bytes
/// copied verbatim into the target directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinTemplate {
    /// Single-resource storage application.
    Simple,
    /// Multi-character storage application (accounts with several characters).
    Multiple,
}

impl BuiltinTemplate {
    /// All builtin templates, in listing order.
    pub const ALL: [Self; 2] = [Self::Simple, Self::Multiple];

    /// The selector string that resolves to this template.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Simple => "default:simple",
            Self::Multiple => "default:multiple",
        }
    }

    /// One-line description for `stackgen list`.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Simple => "Single-resource HTTP storage application",
            Self::Multiple => "Multi-character HTTP storage application",
        }
    }
}

impl fmt::Display for BuiltinTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Resolved meaning of the user-supplied template string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateSelector {
    /// One of the bundled templates.
    Builtin(BuiltinTemplate),
    /// A caller-supplied file, absolute or relative to the invocation CWD.
    File(PathBuf),
}

impl TemplateSelector {
    /// Parse a selector string.
    ///
    /// Builtin identifiers win; every other string is a literal path.
    pub fn parse(raw: &str) -> Self {
        BuiltinTemplate::ALL
            .into_iter()
            .find(|b| b.id() == raw)
            .map_or_else(|| Self::File(PathBuf::from(raw)), Self::Builtin)
    }
}

impl From<&str> for TemplateSelector {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}

impl fmt::Display for TemplateSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Builtin(b) => f.write_str(b.id()),
            Self::File(p) => write!(f, "{}", p.display()),
        }
    }
}
