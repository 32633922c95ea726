//! Audit trail for secret generation.
//!
//! Sinks are write-only and best-effort. The engine never lets an audit
//! failure reach its caller.

use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;

use crate::domain::session::SessionId;

pub mod channel;

pub use channel::{spawn_audit_writer, ChannelAuditSink};

/// One secret-generation event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditRecord {
    pub session_id: SessionId,
    pub secret_number: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuditError {
    #[error("audit channel is full")]
    Full,
    #[error("audit channel is closed")]
    Closed,
    #[error("audit write failed: {0}")]
    Write(String),
}

/// Write-only recorder. Must not block the caller.
pub trait AuditSink: Send + Sync {
    fn record(&self, record: AuditRecord) -> Result<(), AuditError>;
}

/// Emits each record as an `info` event on the `audit` tracing target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, record: AuditRecord) -> Result<(), AuditError> {
        let timestamp = record
            .timestamp
            .format(&time::format_description::well_known::Rfc3339)
            .map_err(|e| AuditError::Write(e.to_string()))?;

        tracing::info!(
            target: "audit",
            session_id = %record.session_id,
            secret_number = record.secret_number,
            timestamp = %timestamp,
            "secret_generated"
        );
        Ok(())
    }
}
