use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a quiz; used as the render key of its card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Pricing tier of a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Paid,
}

/// One quiz record shown as a grid entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    pub tier: Tier,
    #[serde(default)]
    pub purchased: bool,
    #[serde(default)]
    pub description: String,
    /// Number of questions in the quiz.
    #[serde(default)]
    pub questions: u32,
    /// Display price for paid quizzes.
    #[serde(default)]
    pub price_cents: Option<u32>,
}

impl CatalogItem {
    pub fn new(id: u64, title: impl Into<String>, tier: Tier) -> Self {
        Self {
            id: ItemId(id),
            title: title.into(),
            tier,
            purchased: false,
            description: String::new(),
            questions: 0,
            price_cents: None,
        }
    }

    pub fn purchased(mut self, purchased: bool) -> Self {
        self.purchased = purchased;
        self
    }

    pub fn with_questions(mut self, questions: u32) -> Self {
        self.questions = questions;
        self
    }

    pub fn with_price_cents(mut self, price_cents: u32) -> Self {
        self.price_cents = Some(price_cents);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_free(&self) -> bool {
        self.tier == Tier::Free
    }

    /// Paid and not yet owned.
    pub fn is_locked(&self) -> bool {
        self.tier == Tier::Paid && !self.purchased
    }

    /// Short tier badge: `FREE`, the formatted price, or `PAID` when no price is known.
    pub fn badge(&self) -> String {
        match (self.tier, self.price_cents) {
            (Tier::Free, _) => "FREE".to_string(),
            (Tier::Paid, Some(cents)) => format!("${}.{:02}", cents / 100, cents % 100),
            (Tier::Paid, None) => "PAID".to_string(),
        }
    }
}
