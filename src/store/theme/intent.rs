use crate::store::mvi::Intent;
use crate::store::theme::state::Theme;

#[derive(Debug, Clone, Copy)]
pub enum ThemeIntent {
    Set(Theme),
    Toggle,
}

impl Intent for ThemeIntent {}
