use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::SearchType;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Remote movie API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL all resource paths are joined onto (e.g., "https://api.example.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total request timeout in seconds (default: 10).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Local key-value persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding one file per key. `None` uses the platform data dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default = "default_watchlist_key")]
    pub watchlist_key: String,
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

/// Search gate applied before a query reaches the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Trimmed queries shorter than this never trigger a search (default: 2).
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    #[serde(default)]
    pub default_type: SearchType,
}

fn default_base_url() -> String {
    "https://api.example.com".to_string()
}

fn default_timeout() -> u32 {
    10
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_watchlist_key() -> String {
    "movieflix-watchlist".to_string()
}

fn default_theme_key() -> String {
    "movieflix-theme".to_string()
}

fn default_min_query_len() -> usize {
    2
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            watchlist_key: default_watchlist_key(),
            theme_key: default_theme_key(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: default_min_query_len(),
            default_type: SearchType::Title,
        }
    }
}

impl StorageConfig {
    /// Resolved storage directory.
    ///
    /// Falls back to `./.movietime` when the platform has no data dir.
    pub fn resolved_dir(&self) -> PathBuf {
        match self.dir {
            Some(ref dir) => dir.clone(),
            None => dirs::data_dir()
                .map(|d| d.join("movietime"))
                .unwrap_or_else(|| PathBuf::from(".movietime")),
        }
    }
}
