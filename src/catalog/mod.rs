//! Quiz catalog model and data source.
//!
//! The catalog is the external collaborator the view layer reads from: it
//! owns the full list of quizzes and hands out the subset matching a
//! [`FilterCategory`].

mod filter;
mod item;
mod source;

pub use filter::{FilterCategory, ParseFilterError};
pub use item::{CatalogItem, ItemId, Tier};
pub use source::{CatalogError, CatalogSource, StaticCatalog};
