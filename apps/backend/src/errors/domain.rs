//! Domain-level error type used across the engine, stores, and providers.
//!
//! This error type is HTTP-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! through `From<DomainError> for AppError`.

use thiserror::Error;

use crate::domain::session::SessionId;

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    EntropyUnavailable,
    StoreUnavailable,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Configured range cannot produce a secret (`min >= max`)
    #[error("invalid configured range: minimum {min} must be less than maximum {max}")]
    Configuration { min: i64, max: i64 },
    /// No session with this id
    #[error("game {0} not found")]
    NotFound(SessionId),
    /// Guess submitted against a finished session
    #[error("game {0} is already finished")]
    InvalidState(SessionId),
    /// Guess outside the configured bounds
    #[error("guess {guess} is out of range: the number must be between {min} and {max}")]
    OutOfRange { guess: i64, min: i64, max: i64 },
    /// Versioned update lost a race with another writer
    #[error("game {id} was modified concurrently: expected version {expected}, found {actual}")]
    Conflict {
        id: SessionId,
        expected: u64,
        actual: u64,
    },
    /// Infrastructure/operational failures
    #[error("infra {kind:?}: {detail}")]
    Infra { kind: InfraErrorKind, detail: String },
}

impl DomainError {
    pub fn configuration(min: i64, max: i64) -> Self {
        Self::Configuration { min, max }
    }
    pub fn not_found(id: SessionId) -> Self {
        Self::NotFound(id)
    }
    pub fn invalid_state(id: SessionId) -> Self {
        Self::InvalidState(id)
    }
    pub fn out_of_range(guess: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange { guess, min, max }
    }
    pub fn conflict(id: SessionId, expected: u64, actual: u64) -> Self {
        Self::Conflict {
            id,
            expected,
            actual,
        }
    }
    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra {
            kind,
            detail: detail.into(),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}
