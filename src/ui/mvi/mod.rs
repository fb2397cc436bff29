//! Model-View-Intent (MVI) primitives.
//!
//! The screen state is owned by the app and only changes through a reducer:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ render(items, loading, filter, theme)
//!    ↑                                        │
//!    └────────────── clicks, fetch results ───┘
//! ```
//!
//! - **State**: immutable snapshot that the components read
//! - **Intent**: user action or fetch outcome
//! - **Reducer**: pure function `(State, Intent) -> State`

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
