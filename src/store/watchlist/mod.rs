mod intent;
mod reducer;
mod state;

pub use intent::WatchlistIntent;
pub use reducer::WatchlistReducer;
pub use state::WatchlistState;
