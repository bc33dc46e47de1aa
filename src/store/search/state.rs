use crate::model::{Movie, SearchType};
use crate::store::mvi::StoreState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub query: String,
    pub search_type: SearchType,
    pub results: Vec<Movie>,
    pub loading: bool,
    pub error: Option<String>,
    /// Set once any search has completed, successfully or not.
    pub has_searched: bool,
    pub(crate) generation: u64,
}

impl StoreState for SearchState {}

impl SearchState {
    /// Generation of the most recently issued search.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Completed with no error and no results.
    pub fn is_empty_result(&self) -> bool {
        self.has_searched && self.error.is_none() && self.results.is_empty()
    }
}
