use crate::store::filters::intent::FiltersIntent;
use crate::store::filters::state::FiltersState;
use crate::store::mvi::Reducer;

pub struct FiltersReducer;

impl Reducer for FiltersReducer {
    type State = FiltersState;
    type Intent = FiltersIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FiltersIntent::SetGenre(selected_genre) => FiltersState {
                selected_genre,
                ..state
            },
            FiltersIntent::SetActor(selected_actor) => FiltersState {
                selected_actor,
                ..state
            },
            FiltersIntent::SetDirector(selected_director) => FiltersState {
                selected_director,
                ..state
            },
            FiltersIntent::ClearAll => FiltersState::default(),
        }
    }
}
