//! Client-side state core for a movie catalog viewer.
//!
//! - [`api`]: REST client with envelope unwrapping and failure normalization
//! - [`storage`]: local key-value persistence that never fails on load
//! - [`store`]: watchlist, theme, movies, search and filter stores as pure reducers
//! - [`context`]: the explicitly constructed owner of all stores and their effects

pub mod api;
pub mod config;
pub mod context;
pub mod logging;
pub mod model;
pub mod storage;
pub mod store;

pub use context::{AppContext, FetchOutcome, StorageKeys};
