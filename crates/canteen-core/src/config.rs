//! Core data types and configuration for the canteen inventory.

use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// File the inventory is persisted to when no other path is given.
pub const DEFAULT_DB_PATH: &str = "db.json";

/// Prices must be finite and non-negative; anything else cannot be stored.
pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

/// A sellable item in the canteen.
///
/// The on-disk form is `{id, name, price, available}`. Older files written with
/// `snack_id` / `availability` are still accepted when reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snack {
    #[serde(alias = "snack_id")]
    pub id: i64,
    pub name: String,
    pub price: f64,
    #[serde(alias = "availability")]
    pub available: bool,
}

impl Snack {
    /// A freshly stocked snack is always available.
    pub fn new(id: i64, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            available: true,
        }
    }

    pub fn has_valid_price(&self) -> bool {
        is_valid_price(self.price)
    }
}

impl fmt::Display for Snack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ID: {}) - Price: {} - Availability: {}",
            self.name,
            self.id,
            self.price,
            if self.available { "Yes" } else { "No" }
        )
    }
}

/// A completed sale: an owned copy of the snack as it was when sold.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    pub snack: Snack,
    pub sold_at: DateTime<Utc>,
}

/// Configuration for a canteen session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanteenConfig {
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,
    /// Surface load failures instead of starting from an empty inventory.
    #[serde(default)]
    pub strict_load: bool,
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DB_PATH)
}

impl Default for CanteenConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            strict_load: false,
        }
    }
}
