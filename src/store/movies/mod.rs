//! Server-fetched movie collections.
//!
//! Every fetch is tagged with a generation number issued when it starts.
//! A completion only applies if its generation is still the latest one for
//! its [`RequestKey`]; anything older is dropped.

mod intent;
mod reducer;
mod state;

pub use intent::MoviesIntent;
pub use reducer::MoviesReducer;
pub use state::{FetchStatus, MoviesState, RequestKey};
