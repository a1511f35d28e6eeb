//! Selection state: range items and the insertion-ordered selection set.
//!
//! The selection is a single abstraction over "which items are chosen and
//! in what order". Membership checks are O(1) via a label index; display
//! order is insertion order. The index and the item list can never diverge
//! because nothing outside this type touches either.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One selectable numeric-range option. `label` is the identity key within
/// a catalog; two items with the same label are the same option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeItem {
    pub label: String,
    pub start: f64,
    pub end: f64,
}

impl RangeItem {
    pub fn new(label: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            label: label.into(),
            start,
            end,
        }
    }
}

/// Insertion-order-preserving set of selected [`RangeItem`]s, keyed by
/// label.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    items: Vec<RangeItem>,
    labels: HashSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from a list of items, dropping duplicate labels
    /// (first occurrence wins).
    pub fn from_items(items: Vec<RangeItem>) -> Self {
        let mut selection = Self::new();
        for item in items {
            if selection.labels.insert(item.label.clone()) {
                selection.items.push(item);
            }
        }
        selection
    }

    /// Build a selection as the subsequence of `catalog` whose labels
    /// appear in `labels`. Catalog order wins over label order, so the
    /// selection stays stable when the host reorders its input labels.
    pub fn from_labels(labels: &[String], catalog: &[RangeItem]) -> Self {
        let wanted: HashSet<&str> = labels.iter().map(String::as_str).collect();
        Self::from_items(
            catalog
                .iter()
                .filter(|item| wanted.contains(item.label.as_str()))
                .cloned()
                .collect(),
        )
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn items(&self) -> &[RangeItem] {
        &self.items
    }

    /// Selected labels in insertion order.
    pub fn labels(&self) -> Vec<String> {
        self.items.iter().map(|item| item.label.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// What the selection would look like after toggling `item`: present
    /// labels are removed, absent ones appended. Returns a new list rather
    /// than mutating so the caller can run it through validation first.
    pub fn toggled(&self, item: &RangeItem) -> Vec<RangeItem> {
        if self.labels.contains(&item.label) {
            self.items
                .iter()
                .filter(|existing| existing.label != item.label)
                .cloned()
                .collect()
        } else {
            let mut next = self.items.clone();
            next.push(item.clone());
            next
        }
    }
}
