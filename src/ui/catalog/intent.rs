use crate::catalog::{CatalogItem, FilterCategory};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// User picked a filter. Starts a new request.
    SelectFilter(FilterCategory),
    /// Items for `request` arrived.
    Loaded {
        request: u64,
        items: Vec<CatalogItem>,
    },
    /// Fetch for `request` failed.
    LoadFailed { request: u64, error: String },
    /// Keyboard focus moved by `delta` cards.
    MoveFocus { delta: isize },
}

impl Intent for CatalogIntent {}
