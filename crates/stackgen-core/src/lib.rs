//! Stackgen Core - generation engine for deployment skeletons.
//!
//! This crate provides the domain and application layers for the stackgen
//! deployment generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          stackgen-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (GenerateService)             │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Driven: Filesystem, TemplateSource)  │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    stackgen-adapters (Infrastructure)   │
//! │  (LocalFilesystem, BundledTemplates)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (GenerationRequest, composers, selector)│
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stackgen_core::domain::{GenerationRequest, TemplateSelector};
//! # fn adapters() -> (Box<dyn stackgen_core::application::ports::Filesystem>,
//! #                   Box<dyn stackgen_core::application::ports::TemplateSource>) {
//! #     unimplemented!()
//! # }
//! use stackgen_core::application::GenerateService;
//!
//! let request = GenerationRequest::builder("/tmp/proj", TemplateSelector::parse("default:simple"))
//!     .database_port(27018)
//!     .build()
//!     .unwrap();
//!
//! let (filesystem, templates) = adapters();
//! let service = GenerateService::new(filesystem, templates);
//! service.generate(&request).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateService,
        ports::{Filesystem, TemplateSource},
    };
    pub use crate::domain::{
        Artifact, BuiltinTemplate, GenerationRequest, GenerationRequestBuilder, TemplateSelector,
        composers, paths,
    };
    pub use crate::error::{StackgenError, StackgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
