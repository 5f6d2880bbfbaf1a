//! In-memory snack inventory keyed by snack id.

use std::collections::btree_map::{self, BTreeMap, Entry};

use chrono::Utc;
use log::debug;

use crate::config::{Sale, Snack};
use crate::sales::SalesRecord;

/// Result of an operation that only needs the snack to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    NotFound,
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Result of [`Inventory::sell`].
#[derive(Debug, Clone, PartialEq)]
pub enum SaleOutcome {
    Sold(Sale),
    Unavailable,
    NotFound,
}

impl SaleOutcome {
    pub fn message(&self, id: i64) -> String {
        match self {
            Self::Sold(sale) => format!("Sale recorded: {}", sale.snack),
            Self::Unavailable => "Sorry, this snack is not available.".to_string(),
            Self::NotFound => not_found_message(id),
        }
    }
}

pub(crate) fn not_found_message(id: i64) -> String {
    format!("Snack with ID {id} not found in inventory.")
}

/// Every snack the canteen knows about.
///
/// Keys always equal the `id` of the stored snack. Ordered so that saved files
/// and listings are deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    snacks: BTreeMap<i64, Snack>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stock a new snack, replacing any existing snack with the same id.
    pub fn add(&mut self, id: i64, name: impl Into<String>, price: f64) -> &Snack {
        let snack = Snack::new(id, name, price);
        match self.snacks.entry(id) {
            Entry::Occupied(mut entry) => {
                let previous = entry.insert(snack);
                debug!("replaced snack {id} ({})", previous.name);
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                debug!("added snack {id}");
                entry.insert(snack)
            }
        }
    }

    pub fn remove(&mut self, id: i64) -> Outcome {
        match self.snacks.remove(&id) {
            Some(_) => {
                debug!("removed snack {id}");
                Outcome::Applied
            }
            None => Outcome::NotFound,
        }
    }

    /// Set the availability flag directly. Setting it to its current value is
    /// allowed and still reports [`Outcome::Applied`].
    pub fn set_availability(&mut self, id: i64, available: bool) -> Outcome {
        match self.snacks.get_mut(&id) {
            Some(snack) => {
                snack.available = available;
                debug!("snack {id} availability set to {available}");
                Outcome::Applied
            }
            None => Outcome::NotFound,
        }
    }

    /// Sell one snack. Only an available snack can be sold; selling marks it
    /// unavailable and appends a snapshot of it to `sales`.
    pub fn sell(&mut self, id: i64, sales: &mut SalesRecord) -> SaleOutcome {
        let Some(snack) = self.snacks.get_mut(&id) else {
            return SaleOutcome::NotFound;
        };
        if !snack.available {
            debug!("snack {id} is unavailable, not sold");
            return SaleOutcome::Unavailable;
        }

        snack.available = false;
        let sale = Sale {
            snack: snack.clone(),
            sold_at: Utc::now(),
        };
        sales.push(sale.clone());
        debug!("sold snack {id} for {}", sale.snack.price);
        SaleOutcome::Sold(sale)
    }

    pub fn get(&self, id: i64) -> Option<&Snack> {
        self.snacks.get(&id)
    }

    pub fn contains(&self, id: i64) -> bool {
        self.snacks.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.snacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snacks.is_empty()
    }

    /// Snacks in ascending id order.
    pub fn iter(&self) -> btree_map::Values<'_, i64, Snack> {
        self.snacks.values()
    }

    /// Insert an already-built snack under its own id. Used when restoring
    /// from storage, where the availability flag must be kept as saved.
    pub(crate) fn insert(&mut self, snack: Snack) -> Option<Snack> {
        self.snacks.insert(snack.id, snack)
    }

    pub(crate) fn as_map(&self) -> &BTreeMap<i64, Snack> {
        &self.snacks
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Snack;
    type IntoIter = btree_map::Values<'a, i64, Snack>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
