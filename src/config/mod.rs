//! Configuration loading and shared access.

mod loader;
mod store;
mod types;

pub use loader::{ConfigError, BASE_URL_ENV};
pub use store::ConfigStore;
pub use types::{ApiConfig, Config, SearchConfig, StorageConfig};
