//! Guess evaluation.

use serde::{Deserialize, Serialize};

/// Relation between the secret and the latest guess, from the guesser's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feedback {
    /// The secret is greater than the guess.
    Greater,
    /// The secret is lesser than the guess.
    Lesser,
    Correct,
}

pub fn evaluate_guess(guess: i64, secret: i64) -> Feedback {
    use std::cmp::Ordering;

    match guess.cmp(&secret) {
        Ordering::Less => Feedback::Greater,
        Ordering::Greater => Feedback::Lesser,
        Ordering::Equal => Feedback::Correct,
    }
}
