use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::Numeric;

/// Accumulated demand for one ingredient across the week.
///
/// Each standardized unit keeps its own running total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ShoppingListEntry {
    pub quantities: BTreeMap<String, f64>,
    /// Number of contributions whose quantity cell did not parse.
    pub unparsed_quantities: usize,
    pub estimated_cost: Option<f64>,
}

impl ShoppingListEntry {
    pub fn add(&mut self, quantity: Numeric<f64>, unit: &str) {
        let total = self.quantities.entry(unit.to_string()).or_insert(0.0);
        match quantity {
            Numeric::Value(q) => *total += q,
            Numeric::Unparsed => self.unparsed_quantities += 1,
        }
    }

    /// Sum over every unit accumulator, regardless of unit.
    pub fn total_quantity(&self) -> f64 {
        self.quantities.values().sum()
    }

    pub fn units_seen(&self) -> impl Iterator<Item = &str> {
        self.quantities.keys().map(String::as_str)
    }

    pub fn has_mixed_units(&self) -> bool {
        self.quantities.len() > 1
    }

    /// Whether the quantity is fully known.
    pub fn is_complete(&self) -> bool {
        self.unparsed_quantities == 0
    }
}

/// Ingredient demand keyed by name, ordered alphabetically.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ShoppingList {
    entries: BTreeMap<String, ShoppingListEntry>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry_mut(&mut self, name: &str) -> &mut ShoppingListEntry {
        self.entries.entry(name.to_string()).or_default()
    }

    pub fn get(&self, name: &str) -> Option<&ShoppingListEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ShoppingListEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut ShoppingListEntry)> {
        self.entries.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Sum of every known cost; unknown costs are left out.
    pub fn total_cost(&self) -> f64 {
        self.entries.values().filter_map(|e| e.estimated_cost).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
