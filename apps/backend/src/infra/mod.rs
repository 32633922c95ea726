//! Infrastructure layer - application wiring.

pub mod state;

pub use state::{build_state, StateBuilder};
