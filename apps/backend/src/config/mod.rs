pub mod app;
pub mod range;

pub use app::ServerConfig;
pub use range::{ConfigProvider, RuntimeRangeConfig, StaticRangeConfig};
