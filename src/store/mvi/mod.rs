//! Model-View-Intent (MVI) primitives shared by every store.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable snapshot of one slice of client state
//! - **Intent**: User action or fetch completion
//! - **Reducer**: Pure function that transforms state based on intents
//!
//! Side effects (persistence, theme application) never run inside a
//! reducer; [`crate::context::AppContext`] performs them after the
//! transition.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StoreState;
