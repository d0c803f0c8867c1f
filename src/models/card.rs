use std::fmt;

use serde::{Deserialize, Serialize};

use super::era::Era;
use super::price::{PriceData, PricePoint};
use crate::error::{Result, VaultError};

// ---------------------------------------------------------------------------
// CardId — Opaque identity of a card record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// CardImages — Hosted image URLs (resolved externally)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardImages {
    pub small: String,
    pub large: String,
}

// ---------------------------------------------------------------------------
// Card — The catalog record
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub name: String,
    pub set: String,
    pub year: i32,
    pub language: String,
    pub edition: String,
    pub psa_grade: Option<u8>,
    pub bgs_grade: Option<u8>,
    #[serde(default)]
    pub rarity: Vec<String>,
    pub images: CardImages,
    pub retail_price: PriceData,
    pub market_price: PriceData,
    pub price_history: Vec<PricePoint>,
    #[serde(default)]
    pub provenance: String,
    pub scarcity_score: u8,
    #[serde(default)]
    pub notes: String,
    pub is_elite: bool,
    pub era: Era,
}

impl Card {
    /// Check the per-record invariants: scarcity range and a non-empty,
    /// chronologically ordered price history.
    pub fn validate(&self) -> Result<()> {
        if self.scarcity_score > 100 {
            return Err(VaultError::InvalidArgument(format!(
                "Card '{}' has scarcity score {} (expected 0-100)",
                self.id, self.scarcity_score
            )));
        }
        if self.price_history.is_empty() {
            return Err(VaultError::InvalidArgument(format!(
                "Card '{}' has an empty price history",
                self.id
            )));
        }
        if self
            .price_history
            .windows(2)
            .any(|pair| pair[0].date > pair[1].date)
        {
            return Err(VaultError::InvalidArgument(format!(
                "Card '{}' has a price history out of date order",
                self.id
            )));
        }
        Ok(())
    }
}
