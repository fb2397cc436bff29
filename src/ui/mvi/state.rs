//! Base trait for screen state.

/// Marker trait for UI state objects.
///
/// States are cloned rather than mutated in place, carry everything a render
/// needs, and compare with `PartialEq` so callers can skip no-op updates.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
