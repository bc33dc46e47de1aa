mod intent;
mod reducer;
mod state;
mod surface;

pub use intent::ThemeIntent;
pub use reducer::ThemeReducer;
pub use state::{Theme, ThemeState};
pub use surface::{DocumentTheme, ThemeSurface};
