use crate::store::mvi::Reducer;
use crate::store::watchlist::intent::WatchlistIntent;
use crate::store::watchlist::state::WatchlistState;

pub struct WatchlistReducer;

impl Reducer for WatchlistReducer {
    type State = WatchlistState;
    type Intent = WatchlistIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WatchlistIntent::Add(movie) => {
                if !state.contains(&movie.id) {
                    state.push(movie);
                }
            }
            WatchlistIntent::Remove { id } => state.retain_except(&id),
            WatchlistIntent::Toggle(movie) => {
                if state.contains(&movie.id) {
                    state.retain_except(&movie.id);
                } else {
                    state.push(movie);
                }
            }
            WatchlistIntent::Clear => state.clear(),
        }
        state
    }
}
