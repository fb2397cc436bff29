use std::collections::HashSet;

use crate::catalog::{CatalogItem, ItemId};

/// Number of skeleton blocks shown while loading.
pub const PLACEHOLDER_COUNT: usize = 6;

/// Which of the three presentations is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Loading,
    Empty,
    Populated,
}

/// The single presentation derived from `(loading, items)`. Never stored.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<'a> {
    Loading,
    Empty,
    Populated(Vec<&'a CatalogItem>),
}

impl<'a> ViewState<'a> {
    /// Loading wins over items; no items means Empty.
    ///
    /// Items sharing an id with an earlier item are dropped with a warning.
    pub fn derive(loading: bool, items: &'a [CatalogItem]) -> Self {
        if loading {
            return ViewState::Loading;
        }
        if items.is_empty() {
            return ViewState::Empty;
        }

        let mut seen = HashSet::with_capacity(items.len());
        let mut unique = Vec::with_capacity(items.len());
        for item in items {
            if seen.insert(item.id) {
                unique.push(item);
            } else {
                tracing::warn!(id = %item.id, title = %item.title, "duplicate catalog id, keeping first");
            }
        }
        ViewState::Populated(unique)
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            ViewState::Loading => ViewKind::Loading,
            ViewState::Empty => ViewKind::Empty,
            ViewState::Populated(_) => ViewKind::Populated,
        }
    }

    /// Render keys in order; empty unless populated.
    pub fn keys(&self) -> Vec<ItemId> {
        match self {
            ViewState::Populated(items) => items.iter().map(|item| item.id).collect(),
            _ => Vec::new(),
        }
    }

    pub fn items(&self) -> &[&'a CatalogItem] {
        match self {
            ViewState::Populated(items) => items,
            _ => &[],
        }
    }
}
