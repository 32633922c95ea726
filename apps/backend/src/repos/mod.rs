//! Repository traits for the domain layer.

pub mod sessions;

pub use sessions::{require_session, InMemorySessionStore, SessionStore};
