//! Error handling for the guess backend.

pub mod domain;
pub mod error_code;

pub use domain::{DomainError, InfraErrorKind};
pub use error_code::ErrorCode;
