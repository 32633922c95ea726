use std::sync::Arc;

use parking_lot::Mutex;
use tokio::task::JoinHandle;

use crate::config::range::ConfigProvider;
use crate::services::guess_engine::GuessEngine;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    engine: Arc<GuessEngine>,
    config: Arc<dyn ConfigProvider>,
    audit_writer: Arc<Mutex<Option<JoinHandle<()>>>>,
}

impl AppState {
    /// `config` must be the same provider the engine was built with so that
    /// `/api/config` reports the range guesses are validated against.
    pub fn new(engine: Arc<GuessEngine>, config: Arc<dyn ConfigProvider>) -> Self {
        Self {
            engine,
            config,
            audit_writer: Arc::new(Mutex::new(None)),
        }
    }

    /// Attach the task draining the default audit channel.
    pub fn with_audit_writer(self, writer: JoinHandle<()>) -> Self {
        *self.audit_writer.lock() = Some(writer);
        self
    }

    pub fn engine(&self) -> &GuessEngine {
        &self.engine
    }

    pub fn config(&self) -> &dyn ConfigProvider {
        self.config.as_ref()
    }

    /// Hand over the audit writer task, if this state spawned one.
    ///
    /// The task finishes once every clone of this state (and so every
    /// sender) is dropped and the queued records are written.
    pub fn take_audit_writer(&self) -> Option<JoinHandle<()>> {
        self.audit_writer.lock().take()
    }
}
