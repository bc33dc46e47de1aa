use crate::store::mvi::Intent;

/// `None` unsets a filter.
#[derive(Debug, Clone)]
pub enum FiltersIntent {
    SetGenre(Option<String>),
    SetActor(Option<String>),
    SetDirector(Option<String>),
    ClearAll,
}

impl Intent for FiltersIntent {}
