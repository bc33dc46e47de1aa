use crate::store::mvi::Reducer;
use crate::store::search::intent::SearchIntent;
use crate::store::search::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::SetQuery(query) => SearchState { query, ..state },
            SearchIntent::SetSearchType(search_type) => SearchState {
                search_type,
                ..state
            },
            SearchIntent::Started => SearchState {
                loading: true,
                error: None,
                generation: state.generation + 1,
                ..state
            },
            SearchIntent::Loaded {
                generation,
                results,
            } if generation == state.generation => SearchState {
                loading: false,
                results,
                has_searched: true,
                ..state
            },
            SearchIntent::Failed {
                generation,
                message,
            } if generation == state.generation => SearchState {
                loading: false,
                error: Some(message),
                has_searched: true,
                ..state
            },
            SearchIntent::Loaded { .. } | SearchIntent::Failed { .. } => state,
            SearchIntent::Clear => SearchState {
                query: String::new(),
                results: Vec::new(),
                has_searched: false,
                error: None,
                loading: false,
                // Orphans any search still in flight.
                generation: state.generation + 1,
                search_type: state.search_type,
            },
        }
    }
}
