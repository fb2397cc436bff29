use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::filter::FilterCategory;
use super::item::CatalogItem;

const BUNDLED_CATALOG: &str = include_str!("../../assets/sample_catalog.toml");

/// Errors that can occur when loading or querying a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog '{origin}': {source}")]
    ParseError {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Catalog contains duplicate quiz id {id}")]
    DuplicateId { id: u64 },

    #[error("Catalog validation failed: {message}")]
    ValidationError { message: String },
}

/// Supplies the items for a filter. Implementations own any I/O.
pub trait CatalogSource {
    fn fetch(&self, filter: FilterCategory) -> Result<Vec<CatalogItem>, CatalogError>;
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    quizzes: Vec<CatalogItem>,
}

/// In-memory catalog loaded once from TOML.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    items: Vec<CatalogItem>,
}

impl StaticCatalog {
    /// Builds a catalog from items, rejecting duplicate ids and blank titles.
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId { id: item.id.0 });
            }
            if item.title.trim().is_empty() {
                return Err(CatalogError::ValidationError {
                    message: format!("Quiz {} has an empty title", item.id),
                });
            }
        }
        Ok(Self { items })
    }

    /// The sample catalog compiled into the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_toml_str(BUNDLED_CATALOG, "bundled catalog")
    }

    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|source| CatalogError::ParseError {
                origin: origin.to_string(),
                source,
            })?;
        Self::new(file.quizzes)
    }

    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, &path.display().to_string())
    }

    /// Loads `path` when given, the bundled sample otherwise.
    pub fn open(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::bundled(),
        }
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CatalogSource for StaticCatalog {
    fn fetch(&self, filter: FilterCategory) -> Result<Vec<CatalogItem>, CatalogError> {
        let items: Vec<CatalogItem> = self
            .items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();
        tracing::debug!(%filter, count = items.len(), "catalog fetch");
        Ok(items)
    }
}
