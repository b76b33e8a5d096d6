use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::cost;
use crate::models::LineItem;

/// Ordered collection of line items forming the current estimate.
///
/// Insertion order is display order. Items enter only through
/// [`crate::admission::admit`], which validates them first; the ledger itself
/// only stores, removes and totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    items: Vec<LineItem>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Appends an already validated item and returns a reference to it.
    pub(crate) fn push(&mut self, item: LineItem) -> &LineItem {
        self.items.push(item);
        self.items.last().expect("just pushed")
    }

    /// Removes the item at `position` (0-based), shifting later items up by
    /// one. Out-of-range positions are a no-op and return `None`.
    pub fn remove(&mut self, position: usize) -> Option<LineItem> {
        if position < self.items.len() {
            Some(self.items.remove(position))
        } else {
            None
        }
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Grand total, recomputed from the items on every call. Never cached.
    pub fn total(&self) -> Decimal {
        cost::ledger_total(&self.items)
    }
}
