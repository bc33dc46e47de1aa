use crate::store::mvi::Reducer;
use crate::store::theme::intent::ThemeIntent;
use crate::store::theme::state::ThemeState;

pub struct ThemeReducer;

impl Reducer for ThemeReducer {
    type State = ThemeState;
    type Intent = ThemeIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ThemeIntent::Set(theme) => ThemeState { current: theme },
            ThemeIntent::Toggle => ThemeState {
                current: state.current.toggled(),
            },
        }
    }
}
