//! Domain layer: pure game types and rules.

pub mod range;
pub mod rules;
pub mod secret;
pub mod session;

pub use range::RangeConfig;
pub use rules::{evaluate_guess, Feedback};
pub use secret::{OsSecretSource, SecretSource};
pub use session::{GameSession, GameStatus, SessionId};
