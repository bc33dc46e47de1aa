use crate::model::Movie;
use crate::store::mvi::Intent;

#[derive(Debug, Clone)]
pub enum WatchlistIntent {
    /// Insert unless an entry with the same id exists.
    Add(Movie),
    Remove { id: String },
    /// Remove when present, insert otherwise.
    Toggle(Movie),
    Clear,
}

impl Intent for WatchlistIntent {}
