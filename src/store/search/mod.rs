mod gate;
mod intent;
mod reducer;
mod state;

pub use gate::should_search;
pub use intent::SearchIntent;
pub use reducer::SearchReducer;
pub use state::SearchState;
