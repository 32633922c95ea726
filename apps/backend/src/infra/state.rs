use std::sync::Arc;

use crate::audit::{spawn_audit_writer, AuditSink, TracingAuditSink};
use crate::config::range::{ConfigProvider, RuntimeRangeConfig};
use crate::domain::range::RangeConfig;
use crate::domain::secret::{OsSecretSource, SecretSource};
use crate::error::AppError;
use crate::repos::sessions::{InMemorySessionStore, SessionStore};
use crate::services::guess_engine::GuessEngine;
use crate::state::app_state::AppState;

const DEFAULT_AUDIT_CAPACITY: usize = 1024;

/// Builder for creating AppState instances (used in both tests and main)
///
/// Every seam has a production default: in-memory sessions, a runtime range,
/// a channel audit sink draining into tracing, and an OS-seeded secret source.
pub struct StateBuilder {
    range: RangeConfig,
    config: Option<Arc<dyn ConfigProvider>>,
    store: Option<Arc<dyn SessionStore>>,
    audit: Option<Arc<dyn AuditSink>>,
    secrets: Option<Arc<dyn SecretSource>>,
    audit_capacity: usize,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            range: RangeConfig::default(),
            config: None,
            store: None,
            audit: None,
            secrets: None,
            audit_capacity: DEFAULT_AUDIT_CAPACITY,
        }
    }

    /// Initial range for the default `RuntimeRangeConfig`.
    /// Ignored when `with_config_provider` is used.
    pub fn with_range(mut self, range: RangeConfig) -> Self {
        self.range = range;
        self
    }

    pub fn with_config_provider(mut self, config: Arc<dyn ConfigProvider>) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn with_audit(mut self, audit: Arc<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    pub fn with_secret_source(mut self, secrets: Arc<dyn SecretSource>) -> Self {
        self.secrets = Some(secrets);
        self
    }

    pub fn with_audit_capacity(mut self, capacity: usize) -> Self {
        self.audit_capacity = capacity;
        self
    }

    /// Must be awaited inside a tokio runtime when the default audit sink is
    /// used, since it spawns the writer task. Its handle is kept on the state;
    /// see [`AppState::take_audit_writer`].
    pub async fn build(self) -> Result<AppState, AppError> {
        if self.audit_capacity == 0 {
            return Err(AppError::config("audit capacity must be at least 1"));
        }

        let config: Arc<dyn ConfigProvider> = match self.config {
            Some(config) => config,
            None => Arc::new(RuntimeRangeConfig::new(self.range)),
        };
        let store: Arc<dyn SessionStore> = match self.store {
            Some(store) => store,
            None => Arc::new(InMemorySessionStore::new()),
        };
        let secrets: Arc<dyn SecretSource> = match self.secrets {
            Some(secrets) => secrets,
            None => Arc::new(OsSecretSource),
        };
        let (audit, writer): (Arc<dyn AuditSink>, _) = match self.audit {
            Some(audit) => (audit, None),
            None => {
                let (sink, writer) =
                    spawn_audit_writer(self.audit_capacity, Arc::new(TracingAuditSink));
                (Arc::new(sink), Some(writer))
            }
        };

        let engine = GuessEngine::new(store, config.clone(), audit, secrets);
        let state = AppState::new(Arc::new(engine), config);
        Ok(match writer {
            Some(writer) => state.with_audit_writer(writer),
            None => state,
        })
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
