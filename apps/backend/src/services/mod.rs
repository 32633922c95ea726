//! Service layer.

pub mod guess_engine;

pub use guess_engine::{GuessEngine, GuessOutcome, NewGame};
