use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::store::theme::state::Theme;

/// Whatever renders the document and needs to know the visual mode.
///
/// `apply` must be idempotent: applying the same theme twice leaves the
/// same visible state.
pub trait ThemeSurface: Send + Sync {
    fn apply(&self, theme: Theme);
}

/// Document root carrying a single `dark` class flag.
#[derive(Debug, Default)]
pub struct DocumentTheme {
    dark: AtomicBool,
    applied: AtomicU64,
}

impl DocumentTheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the `dark` class is currently set.
    pub fn is_dark(&self) -> bool {
        self.dark.load(Ordering::SeqCst)
    }

    pub fn theme(&self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Number of times a theme has been applied.
    pub fn applied_count(&self) -> u64 {
        self.applied.load(Ordering::SeqCst)
    }
}

impl ThemeSurface for DocumentTheme {
    fn apply(&self, theme: Theme) {
        self.dark.store(theme == Theme::Dark, Ordering::SeqCst);
        self.applied.fetch_add(1, Ordering::SeqCst);
    }
}
