//! The guessing game engine.
//!
//! Stateless between calls: every operation reads the current range from the
//! `ConfigProvider` and the session from the `SessionStore`, and writes back
//! through a version-checked update.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::audit::{AuditRecord, AuditSink};
use crate::config::range::ConfigProvider;
use crate::domain::range::RangeConfig;
use crate::domain::rules::Feedback;
use crate::domain::secret::SecretSource;
use crate::domain::session::{GameSession, GameStatus, SessionId};
use crate::errors::domain::DomainError;
use crate::repos::sessions::{require_session, SessionStore};

/// How many times `make_guess` re-runs after losing a version race.
const CONFLICT_RETRIES: usize = 1;

/// Result of an accepted guess. Never carries the secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessOutcome {
    pub feedback: Feedback,
    pub attempts: u32,
    pub status: GameStatus,
    pub guess_history: Vec<i64>,
}

/// A freshly started game and the range its secret was drawn from.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGame {
    pub session: GameSession,
    pub range: RangeConfig,
}

pub struct GuessEngine {
    store: Arc<dyn SessionStore>,
    config: Arc<dyn ConfigProvider>,
    audit: Arc<dyn AuditSink>,
    secrets: Arc<dyn SecretSource>,
}

impl GuessEngine {
    pub fn new(
        store: Arc<dyn SessionStore>,
        config: Arc<dyn ConfigProvider>,
        audit: Arc<dyn AuditSink>,
        secrets: Arc<dyn SecretSource>,
    ) -> Self {
        Self {
            store,
            config,
            audit,
            secrets,
        }
    }

    /// Start a new game with a secret drawn from the current range.
    ///
    /// Fails with `Configuration` before any side effect if the range is
    /// empty or inverted. The range is read exactly once; callers report the
    /// returned one instead of asking the provider again.
    pub async fn start_game(&self) -> Result<NewGame, DomainError> {
        let range = self.config.get_config().await?.validated()?;
        let secret = self.secrets.draw(&range)?;
        let session = self.store.create(secret).await?;

        let record = AuditRecord {
            session_id: session.id(),
            secret_number: session.secret_number(),
            timestamp: session.created_at(),
        };
        if let Err(e) = self.audit.record(record) {
            warn!(session_id = %session.id(), error = %e, "audit record dropped");
        }

        info!(
            session_id = %session.id(),
            min_range = range.min_range,
            max_range = range.max_range,
            "game started"
        );
        Ok(NewGame { session, range })
    }

    /// Submit a guess against an existing session.
    pub async fn make_guess(
        &self,
        game_id: SessionId,
        user_guess: i64,
    ) -> Result<GuessOutcome, DomainError> {
        let mut retries_left = CONFLICT_RETRIES;
        loop {
            match self.try_guess(game_id, user_guess).await {
                Err(e) if e.is_conflict() && retries_left > 0 => {
                    retries_left -= 1;
                    warn!(session_id = %game_id, error = %e, "guess lost update race, retrying");
                }
                other => return other,
            }
        }
    }

    /// Read-only lookup.
    pub async fn get_game(&self, game_id: SessionId) -> Result<GameSession, DomainError> {
        require_session(self.store.as_ref(), game_id).await
    }

    async fn try_guess(
        &self,
        game_id: SessionId,
        user_guess: i64,
    ) -> Result<GuessOutcome, DomainError> {
        let mut session = require_session(self.store.as_ref(), game_id).await?;

        if session.status().is_finished() {
            return Err(DomainError::invalid_state(game_id));
        }

        self.config.get_config().await?.check_guess(user_guess)?;

        let expected_version = session.version();
        let feedback = session.record_guess(user_guess);
        let session = self.store.update(session, expected_version).await?;

        debug!(
            session_id = %game_id,
            guess = user_guess,
            ?feedback,
            attempts = session.attempts(),
            "guess accepted"
        );
        if session.status().is_finished() {
            info!(session_id = %game_id, attempts = session.attempts(), "game finished");
        }

        Ok(GuessOutcome {
            feedback,
            attempts: session.attempts(),
            status: session.status(),
            guess_history: session.guess_history().to_vec(),
        })
    }
}
