use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::item::{CatalogItem, Tier};

/// One of the four mutually exclusive catalog subsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    #[default]
    All,
    Free,
    Paid,
    Purchased,
}

#[derive(Debug, Error)]
#[error("unknown filter '{0}' (expected one of: all, free, paid, purchased)")]
pub struct ParseFilterError(pub String);

impl FilterCategory {
    /// Every category, in the order the filter bar shows them.
    pub const ALL: [FilterCategory; 4] = [
        FilterCategory::All,
        FilterCategory::Free,
        FilterCategory::Paid,
        FilterCategory::Purchased,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Free => "Free",
            Self::Paid => "Paid",
            Self::Purchased => "Purchased",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Free => "free",
            Self::Paid => "paid",
            Self::Purchased => "purchased",
        }
    }

    /// Position in [`FilterCategory::ALL`].
    pub fn position(self) -> usize {
        match self {
            Self::All => 0,
            Self::Free => 1,
            Self::Paid => 2,
            Self::Purchased => 3,
        }
    }

    /// Next category in bar order, wrapping around.
    pub fn cycle(self, step: isize) -> Self {
        let len = Self::ALL.len() as isize;
        let index = (self.position() as isize + step).rem_euclid(len);
        Self::ALL[index as usize]
    }

    pub fn matches(self, item: &CatalogItem) -> bool {
        match self {
            Self::All => true,
            Self::Free => item.tier == Tier::Free,
            Self::Paid => item.tier == Tier::Paid,
            Self::Purchased => item.purchased,
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterCategory {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseFilterError(s.to_string()))
    }
}
