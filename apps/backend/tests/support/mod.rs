#![allow(dead_code)]

pub mod app_builder;
pub mod fakes;
pub mod harness;

pub use app_builder::create_test_app;
pub use fakes::{FailingAudit, FixedSecret, RecordingAudit, YieldingStore};
pub use harness::{app_state, block_on, Harness};
