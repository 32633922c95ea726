//! Session repository.
//!
//! `update` is the only write path after creation and is guarded by the
//! session's version: a caller must hand back the version it read, and the
//! store refuses the write if someone else got there first.

use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use time::OffsetDateTime;

use crate::domain::session::{GameSession, SessionId};
use crate::errors::domain::{DomainError, InfraErrorKind};

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Allocate id and `created_at`, persist the initial in-progress record.
    async fn create(&self, secret_number: i64) -> Result<GameSession, DomainError>;

    async fn find_by_id(&self, id: SessionId) -> Result<Option<GameSession>, DomainError>;

    /// Replace the full record for `session.id()`.
    ///
    /// Fails with `NotFound` if the record is gone and `Conflict` if its
    /// version no longer equals `expected_version`. On success returns the
    /// stored record carrying `expected_version + 1`.
    async fn update(
        &self,
        session: GameSession,
        expected_version: u64,
    ) -> Result<GameSession, DomainError>;
}

/// Find session by id or fail with `NotFound`.
pub async fn require_session(
    store: &dyn SessionStore,
    id: SessionId,
) -> Result<GameSession, DomainError> {
    store
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::not_found(id))
}

/// Process-local store. Each key's compare-and-replace runs under its shard
/// lock, so concurrent updates to one session are linearized.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<SessionId, GameSession>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, secret_number: i64) -> Result<GameSession, DomainError> {
        let session = GameSession::new(SessionId::new(), secret_number, OffsetDateTime::now_utc());

        match self.sessions.entry(session.id()) {
            Entry::Occupied(_) => Err(DomainError::infra(
                InfraErrorKind::StoreUnavailable,
                format!("session id collision on {}", session.id()),
            )),
            Entry::Vacant(slot) => {
                slot.insert(session.clone());
                Ok(session)
            }
        }
    }

    async fn find_by_id(&self, id: SessionId) -> Result<Option<GameSession>, DomainError> {
        Ok(self.sessions.get(&id).map(|s| s.value().clone()))
    }

    async fn update(
        &self,
        session: GameSession,
        expected_version: u64,
    ) -> Result<GameSession, DomainError> {
        let id = session.id();
        let mut stored = self
            .sessions
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found(id))?;

        let actual = stored.version();
        if actual != expected_version {
            return Err(DomainError::conflict(id, expected_version, actual));
        }

        let updated = session.with_version(expected_version + 1);
        *stored = updated.clone();
        Ok(updated)
    }
}
