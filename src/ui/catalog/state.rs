use std::collections::HashSet;

use crate::catalog::{CatalogItem, FilterCategory};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogScreenState {
    pub active_filter: FilterCategory,
    /// True only until the first result (or failure) arrives.
    pub loading: bool,
    /// A newer fetch is pending while the previous results stay on screen.
    pub refreshing: bool,
    /// Set once any fetch has completed.
    pub loaded: bool,
    pub items: Vec<CatalogItem>,
    /// Id of the latest fetch; results for older ids are dropped.
    pub request: u64,
    /// Index of the keyboard-focused card.
    pub focused: usize,
    /// Last fetch failure. Shown as an empty result.
    pub last_error: Option<String>,
}

impl UiState for CatalogScreenState {}

impl CatalogScreenState {
    /// Number of cards the grid shows: items with a distinct id.
    pub fn card_count(&self) -> usize {
        let mut seen = HashSet::with_capacity(self.items.len());
        self.items.iter().filter(|item| seen.insert(item.id)).count()
    }

    /// Whether a fetch is outstanding, first load or refresh.
    pub fn is_fetching(&self) -> bool {
        self.loading || self.refreshing
    }

    /// Focus index when there is a card to focus.
    pub fn focused_card(&self) -> Option<usize> {
        (!self.loading && self.focused < self.card_count()).then_some(self.focused)
    }
}
