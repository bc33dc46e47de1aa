use crate::model::FilterParams;
use crate::store::mvi::StoreState;

/// Current filter selection. Filtering itself happens server-side.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FiltersState {
    pub selected_genre: Option<String>,
    pub selected_actor: Option<String>,
    pub selected_director: Option<String>,
}

impl StoreState for FiltersState {}

impl FiltersState {
    /// Request parameters for `GET /movies`; empty selections are omitted.
    pub fn params(&self) -> FilterParams {
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());
        FilterParams {
            genre_id: non_empty(&self.selected_genre),
            actor_id: non_empty(&self.selected_actor),
            director_id: non_empty(&self.selected_director),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.params().is_empty()
    }
}
