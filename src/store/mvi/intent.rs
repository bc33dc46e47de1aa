//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (add to watchlist, switch theme)
/// - Fetch lifecycle events (started, resolved, rejected)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
