//! Test doubles for the engine's seams.

use async_trait::async_trait;
use guess_backend::audit::AuditError;
use guess_backend::{
    AuditRecord, AuditSink, DomainError, GameSession, InMemorySessionStore, RangeConfig,
    SecretSource, SessionId, SessionStore,
};
use parking_lot::Mutex;

/// Always draws the same secret, whatever the range.
pub struct FixedSecret(pub i64);

impl SecretSource for FixedSecret {
    fn draw(&self, _range: &RangeConfig) -> Result<i64, DomainError> {
        Ok(self.0)
    }
}

/// Rejects every record.
pub struct FailingAudit;

impl AuditSink for FailingAudit {
    fn record(&self, _record: AuditRecord) -> Result<(), AuditError> {
        Err(AuditError::Closed)
    }
}

/// Keeps every record for later inspection.
#[derive(Default)]
pub struct RecordingAudit {
    records: Mutex<Vec<AuditRecord>>,
}

impl RecordingAudit {
    pub fn records(&self) -> Vec<AuditRecord> {
        self.records.lock().clone()
    }
}

impl AuditSink for RecordingAudit {
    fn record(&self, record: AuditRecord) -> Result<(), AuditError> {
        self.records.lock().push(record);
        Ok(())
    }
}

/// In-memory store that yields to the scheduler between a read and the
/// caller's write, so concurrent guesses actually interleave.
#[derive(Default)]
pub struct YieldingStore {
    pub inner: InMemorySessionStore,
}

#[async_trait]
impl SessionStore for YieldingStore {
    async fn create(&self, secret_number: i64) -> Result<GameSession, DomainError> {
        self.inner.create(secret_number).await
    }

    async fn find_by_id(&self, id: SessionId) -> Result<Option<GameSession>, DomainError> {
        let found = self.inner.find_by_id(id).await;
        tokio::task::yield_now().await;
        found
    }

    async fn update(
        &self,
        session: GameSession,
        expected_version: u64,
    ) -> Result<GameSession, DomainError> {
        self.inner.update(session, expected_version).await
    }
}
