use crate::model::{Movie, SearchType};
use crate::store::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SearchIntent {
    SetQuery(String),
    SetSearchType(SearchType),
    /// A search was issued; supersedes any search still in flight.
    Started,
    Loaded {
        generation: u64,
        results: Vec<Movie>,
    },
    Failed {
        generation: u64,
        message: String,
    },
    /// Reset query, results, error and the searched flag.
    Clear,
}

impl Intent for SearchIntent {}
