//! Append-only log of the sales made during the current run.

use crate::config::Sale;

/// Sales recorded since the process started. Not persisted.
///
/// Only [`crate::inventory::Inventory::sell`] appends, so every entry was
/// present and available in the inventory at the moment it was sold.
#[derive(Debug, Clone, Default)]
pub struct SalesRecord {
    sales: Vec<Sale>,
}

impl SalesRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, sale: Sale) {
        self.sales.push(sale);
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sale> {
        self.sales.iter()
    }

    pub fn last(&self) -> Option<&Sale> {
        self.sales.last()
    }

    /// Sum of the prices of every sale in the record.
    pub fn total(&self) -> f64 {
        self.sales.iter().map(|s| s.snack.price).sum()
    }
}

impl<'a> IntoIterator for &'a SalesRecord {
    type Item = &'a Sale;
    type IntoIter = std::slice::Iter<'a, Sale>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
