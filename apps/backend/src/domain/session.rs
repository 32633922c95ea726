//! Game session model.
//!
//! A `GameSession` is the unit of persistence: one record per game, replaced
//! whole on every accepted guess. The secret is never serialized.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::domain::rules::{evaluate_guess, Feedback};

/// Opaque session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for SessionId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Two-state lifecycle. `Finished` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameStatus {
    InProgress,
    Finished,
}

impl GameStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, GameStatus::Finished)
    }
}

/// One guessing game.
///
/// Fields are private so that `attempts` and `guess_history` can only move
/// together through [`GameSession::record_guess`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    id: SessionId,
    secret_number: i64,
    status: GameStatus,
    attempts: u32,
    guess_history: Vec<i64>,
    created_at: OffsetDateTime,
    version: u64,
}

impl GameSession {
    /// A fresh in-progress session at version 1.
    pub fn new(id: SessionId, secret_number: i64, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            secret_number,
            status: GameStatus::InProgress,
            attempts: 0,
            guess_history: Vec::new(),
            created_at,
            version: 1,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn secret_number(&self) -> i64 {
        self.secret_number
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn guess_history(&self) -> &[i64] {
        &self.guess_history
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    /// Optimistic-lock token; bumped by the store on every successful update.
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn with_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }

    /// Apply an accepted (in-range) guess to an in-progress session.
    ///
    /// Callers must reject finished sessions before calling this; the engine
    /// does so and returns `InvalidState`.
    pub fn record_guess(&mut self, guess: i64) -> Feedback {
        debug_assert!(!self.status.is_finished());

        self.attempts += 1;
        self.guess_history.push(guess);

        let feedback = evaluate_guess(guess, self.secret_number);
        if feedback == Feedback::Correct {
            self.status = GameStatus::Finished;
        }
        feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(secret: i64) -> GameSession {
        GameSession::new(SessionId::new(), secret, OffsetDateTime::now_utc())
    }

    #[test]
    fn test_new_session_starts_empty_and_in_progress() {
        let s = session(10);
        assert_eq!(s.status(), GameStatus::InProgress);
        assert_eq!(s.attempts(), 0);
        assert!(s.guess_history().is_empty());
        assert_eq!(s.version(), 1);
    }

    #[test]
    fn test_record_guess_keeps_history_and_attempts_in_step() {
        let mut s = session(50);
        for g in [10, 90, 40, 60] {
            s.record_guess(g);
            assert_eq!(s.guess_history().len(), s.attempts() as usize);
        }
        assert_eq!(s.guess_history(), &[10, 90, 40, 60]);
        assert_eq!(s.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_correct_guess_finishes_session() {
        let mut s = session(42);
        assert_eq!(s.record_guess(42), Feedback::Correct);
        assert!(s.status().is_finished());
        assert_eq!(s.attempts(), 1);
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        assert_eq!(
            serde_json::to_string(&GameStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::to_string(&GameStatus::Finished).unwrap(),
            "\"finished\""
        );
    }

    #[test]
    fn test_session_id_round_trips_through_str() {
        let id = SessionId::new();
        let parsed: SessionId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }
}
