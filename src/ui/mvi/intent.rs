//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are user actions (a filter pill or card was clicked, focus moved)
/// or data events (a fetch finished or failed). Reducers consume them.
pub trait Intent: Send + 'static {}
