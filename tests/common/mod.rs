//! Shared test helpers.

#![allow(dead_code, unused_imports)]

use quizshelf::catalog::{CatalogError, CatalogItem, CatalogSource, FilterCategory, Tier};
use std::cell::Cell;
use std::rc::Rc;

pub fn free(id: u64, title: &str) -> CatalogItem {
    CatalogItem::new(id, title, Tier::Free).with_questions(10)
}

pub fn paid(id: u64, title: &str) -> CatalogItem {
    CatalogItem::new(id, title, Tier::Paid)
        .with_price_cents(499)
        .with_questions(20)
}

pub fn owned(id: u64, title: &str) -> CatalogItem {
    paid(id, title).purchased(true)
}

/// Items with the given ids, alternating tiers.
pub fn quizzes(ids: &[u64]) -> Vec<CatalogItem> {
    ids.iter()
        .map(|id| {
            if id % 2 == 0 {
                paid(*id, &format!("Quiz {id}"))
            } else {
                free(*id, &format!("Quiz {id}"))
            }
        })
        .collect()
}

pub fn ids(items: &[&CatalogItem]) -> Vec<u64> {
    items.iter().map(|item| item.id.0).collect()
}

/// A source that always fails.
pub struct FailingSource;

impl CatalogSource for FailingSource {
    fn fetch(&self, _filter: FilterCategory) -> Result<Vec<CatalogItem>, CatalogError> {
        Err(CatalogError::ValidationError {
            message: "catalog offline".to_string(),
        })
    }
}

/// A source over fixed items that counts fetches.
pub struct CountingSource {
    pub items: Vec<CatalogItem>,
    pub fetches: Rc<Cell<usize>>,
}

impl CountingSource {
    pub fn new(items: Vec<CatalogItem>) -> (Self, Rc<Cell<usize>>) {
        let fetches = Rc::new(Cell::new(0));
        (
            Self {
                items,
                fetches: Rc::clone(&fetches),
            },
            fetches,
        )
    }
}

impl CatalogSource for CountingSource {
    fn fetch(&self, filter: FilterCategory) -> Result<Vec<CatalogItem>, CatalogError> {
        self.fetches.set(self.fetches.get() + 1);
        Ok(self
            .items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect())
    }
}

/// Rows of a ratatui buffer as plain strings.
pub fn buffer_lines(buffer: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.y..area.bottom())
        .map(|y| {
            (area.x..area.right())
                .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol().to_string()))
                .collect()
        })
        .collect()
}

pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer_lines(buffer).join("\n")
}
