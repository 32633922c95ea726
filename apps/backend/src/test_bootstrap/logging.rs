#![cfg(test)]

//! Logging for unit tests, installed once by the `ctor` hook in `lib.rs`.
//!
//! Delegates to the shared test-support package so unit and integration
//! tests filter the same way (`TEST_LOG`, then `RUST_LOG`, then `warn`).

pub fn init() {
    backend_test_support::logging::init();
}
