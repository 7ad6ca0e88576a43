//! Core domain layer for stackgen.
//!
//! This module contains pure generation logic with no I/O: the
//! [`GenerationRequest`] value object, the [`TemplateSelector`], and the
//! artifact composers. All filesystem and template-payload concerns are
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No heavy crates**: Only std library + thiserror + serde derives
//! - **Immutable values**: All domain objects are Clone + PartialEq

pub mod composers;
pub mod error;
pub mod request;
pub mod selector;

// Re-exports for convenience
pub use composers::{Artifact, paths};
pub use error::DomainError;
pub use request::{
    DEFAULT_API_KEY, DEFAULT_DATABASE_PASSWORD, DEFAULT_DATABASE_PORT, DEFAULT_DATABASE_USER,
    DEFAULT_HTTP_PORT, GenerationRequest, GenerationRequestBuilder,
};
pub use selector::{BuiltinTemplate, TemplateSelector};
