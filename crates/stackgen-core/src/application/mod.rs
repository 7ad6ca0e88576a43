//! Application layer: orchestration of the generation use case.
//!
//! Pure domain logic lives in [`crate::domain`]; everything that touches
//! the outside world goes through the ports defined here.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::GenerateService;
