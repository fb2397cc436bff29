//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place where screen state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure: no I/O, no clocks, no logging of user data.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
