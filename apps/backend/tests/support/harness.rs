use std::sync::Arc;

use guess_backend::{
    build_state, AppState, AuditSink, GuessEngine, InMemorySessionStore, RangeConfig,
    RuntimeRangeConfig, SecretSource, SessionStore,
};

use super::fakes::{FixedSecret, RecordingAudit};

/// An engine wired to inspectable fakes.
pub struct Harness {
    pub engine: GuessEngine,
    pub store: Arc<InMemorySessionStore>,
    pub config: Arc<RuntimeRangeConfig>,
    pub audit: Arc<RecordingAudit>,
}

impl Harness {
    pub fn new(range: RangeConfig, secret: i64) -> Self {
        Self::with_secret_source(range, Arc::new(FixedSecret(secret)))
    }

    pub fn with_secret_source(range: RangeConfig, secrets: Arc<dyn SecretSource>) -> Self {
        let store = Arc::new(InMemorySessionStore::new());
        let config = Arc::new(RuntimeRangeConfig::new(range));
        let audit = Arc::new(RecordingAudit::default());
        let engine = GuessEngine::new(store.clone(), config.clone(), audit.clone(), secrets);
        Self {
            engine,
            store,
            config,
            audit,
        }
    }
}

/// `AppState` over a fixed secret and a caller-held runtime range.
pub async fn app_state(
    config: Arc<RuntimeRangeConfig>,
    secret: i64,
    store: Arc<dyn SessionStore>,
    audit: Arc<dyn AuditSink>,
) -> AppState {
    build_state()
        .with_config_provider(config)
        .with_store(store)
        .with_audit(audit)
        .with_secret_source(Arc::new(FixedSecret(secret)))
        .build()
        .await
        .expect("build app state")
}

/// Drive an async block from a synchronous proptest body.
pub fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("build tokio runtime")
        .block_on(future)
}
