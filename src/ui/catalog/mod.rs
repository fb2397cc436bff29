//! Catalog screen state.
//!
//! Owns what the two stateless components are fed: the active filter, the
//! loading flag and the latest item list.
//!
//! - `state.rs` - screen snapshot
//! - `intent.rs` - user/data actions
//! - `reducer.rs` - transitions

mod intent;
mod reducer;
mod state;

pub use intent::CatalogIntent;
pub use reducer::CatalogReducer;
pub use state::CatalogScreenState;
