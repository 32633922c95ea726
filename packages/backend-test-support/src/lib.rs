//! Shared test utilities for the guess backend.
//!
//! Kept in its own package so unit tests (via `ctor` in the backend's
//! `lib.rs`) and every integration-test binary initialize logging the same
//! way and assert the same error contract.

pub mod logging;
pub mod problem_details;
