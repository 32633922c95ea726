//! Range configuration providers.

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::domain::range::RangeConfig;
use crate::errors::domain::DomainError;

/// Supplies the guessing range.
///
/// Implementations must return the configuration current at call time; the
/// engine reads it once per operation and never caches it.
#[async_trait]
pub trait ConfigProvider: Send + Sync {
    async fn get_config(&self) -> Result<RangeConfig, DomainError>;
}

/// Fixed range, for tests and single-setting deployments.
#[derive(Debug, Clone, Copy)]
pub struct StaticRangeConfig(pub RangeConfig);

#[async_trait]
impl ConfigProvider for StaticRangeConfig {
    async fn get_config(&self) -> Result<RangeConfig, DomainError> {
        Ok(self.0)
    }
}

/// Range that can be replaced while the server is running.
#[derive(Debug, Default)]
pub struct RuntimeRangeConfig {
    current: RwLock<RangeConfig>,
}

impl RuntimeRangeConfig {
    pub fn new(initial: RangeConfig) -> Self {
        Self {
            current: RwLock::new(initial),
        }
    }

    pub fn current(&self) -> RangeConfig {
        *self.current.read()
    }

    /// Replace the range. Validity is checked when a game starts, not here.
    pub fn set(&self, range: RangeConfig) {
        let previous = std::mem::replace(&mut *self.current.write(), range);
        tracing::info!(
            old_min = previous.min_range,
            old_max = previous.max_range,
            new_min = range.min_range,
            new_max = range.max_range,
            "range configuration replaced"
        );
    }
}

#[async_trait]
impl ConfigProvider for RuntimeRangeConfig {
    async fn get_config(&self) -> Result<RangeConfig, DomainError> {
        Ok(self.current())
    }
}
