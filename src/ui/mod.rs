//! Terminal rendering of the quiz catalog.
//!
//! [`filter_bar`] and [`collection`] are the two stateless components. The
//! [`app`] owns everything they are fed; [`presence`] plays their declared
//! motions back frame by frame.

pub mod app;
pub mod card;
pub mod catalog;
pub mod collection;
pub mod events;
pub mod filter_bar;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod motion;
pub mod mvi;
pub mod presence;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod view_state;

pub use app::{App, AppOptions};
pub use runtime::run;
