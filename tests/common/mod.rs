//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use std::sync::Arc;

use movietime::api::ApiClient;
use movietime::config::{ApiConfig, Config};
use movietime::model::{Actor, Director, Genre, Movie};
use movietime::storage::{KeyValueStore, MemoryStore};
use movietime::store::theme::DocumentTheme;
use movietime::AppContext;

pub const WATCHLIST_KEY: &str = "movieflix-watchlist";
pub const THEME_KEY: &str = "movieflix-theme";

// -- Fixtures -----------------------------------------------------------------

pub fn movie(id: &str, title: &str) -> Movie {
    Movie {
        id: id.to_string(),
        title: title.to_string(),
        release_year: 2024,
        rating: 8.5,
        director: Director {
            id: "d1".to_string(),
            name: "Test Director".to_string(),
            bio: None,
        },
        actors: vec![Actor {
            id: "a1".to_string(),
            name: "Test Actor".to_string(),
            bio: None,
        }],
        genres: vec![Genre {
            id: "g1".to_string(),
            name: "Action".to_string(),
        }],
        description: None,
        is_featured: None,
    }
}

pub fn test_movie() -> Movie {
    movie("1", "Test Movie")
}

/// Wire JSON for a movie list with the given `(id, title)` pairs.
pub fn movies_json(items: &[(&str, &str)]) -> String {
    let movies: Vec<Movie> = items.iter().map(|(id, title)| movie(id, title)).collect();
    serde_json::to_string(&movies).unwrap()
}

pub fn details_json(id: &str, title: &str) -> String {
    let mut value = serde_json::to_value(movie(id, title)).unwrap();
    value["reviews"] = serde_json::json!([
        {"user": "ana", "comment": "Great", "rating": 9.0, "date": "2024-05-01"}
    ]);
    value.to_string()
}

// -- Context builders ---------------------------------------------------------

pub fn test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    };
    config
}

pub struct TestContext {
    pub ctx: AppContext,
    pub store: Arc<MemoryStore>,
    pub document: Arc<DocumentTheme>,
}

/// Context over an in-memory store seeded with `values`.
pub fn make_context_with(base_url: &str, values: &[(&str, &str)]) -> TestContext {
    let config = test_config(base_url);
    let store = Arc::new(MemoryStore::with_values(
        values.iter().map(|(k, v)| (k.to_string(), v.to_string())),
    ));
    let document = Arc::new(DocumentTheme::new());
    let api = ApiClient::new(&config.api).expect("valid api config");
    let ctx = AppContext::new(&config, api, store.clone(), document.clone());
    TestContext {
        ctx,
        store,
        document,
    }
}

/// Context whose API is never reached.
pub fn make_offline_context() -> TestContext {
    make_context_with("http://127.0.0.1:9", &[])
}

pub fn stored(store: &MemoryStore, key: &str) -> Option<String> {
    store.get(key).unwrap()
}

pub fn stored_watchlist(store: &MemoryStore) -> Vec<Movie> {
    serde_json::from_str(&stored(store, WATCHLIST_KEY).expect("watchlist persisted")).unwrap()
}
