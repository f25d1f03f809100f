use std::collections::BTreeSet;
use std::str::FromStr;

use serde::Serialize;

/// A numeric field read from a table cell.
///
/// Cells that do not parse are kept as `Unparsed` instead of being rejected,
/// so a bad cell only excludes its row from filters that need the number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Numeric<T> {
    Value(T),
    Unparsed,
}

impl<T: FromStr> Numeric<T> {
    /// Parse a trimmed cell, falling back to `Unparsed`.
    pub fn parse(raw: &str) -> Self {
        raw.trim()
            .parse()
            .map(Numeric::Value)
            .unwrap_or(Numeric::Unparsed)
    }
}

impl Numeric<f64> {
    /// Like [`Numeric::parse`], but `NaN` and infinities count as unparsed.
    pub fn parse_finite(raw: &str) -> Self {
        match Self::parse(raw) {
            Numeric::Value(v) if v.is_finite() => Numeric::Value(v),
            _ => Numeric::Unparsed,
        }
    }
}

impl<T: Copy> Numeric<T> {
    pub fn value(&self) -> Option<T> {
        match self {
            Numeric::Value(v) => Some(*v),
            Numeric::Unparsed => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Numeric<U> {
        match self {
            Numeric::Value(v) => Numeric::Value(f(v)),
            Numeric::Unparsed => Numeric::Unparsed,
        }
    }

    pub fn is_unparsed(&self) -> bool {
        matches!(self, Numeric::Unparsed)
    }
}

/// One `name:quantity:unit` entry of a recipe.
///
/// The quantity is for a single preparation of the parent recipe.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: Numeric<f64>,
    pub unit: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: Numeric::Value(quantity),
            unit: unit.into(),
        }
    }

    /// Copy of this ingredient with the quantity multiplied.
    pub fn scaled(&self, multiplier: f64) -> Self {
        Self {
            name: self.name.clone(),
            quantity: self.quantity.map(|q| q * multiplier),
            unit: self.unit.clone(),
        }
    }
}

/// A recipe row from one of the meal tables.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recipe {
    pub id: Numeric<u32>,
    pub name: String,
    pub total_time_minutes: Numeric<u32>,
    pub tags: BTreeSet<String>,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// True when the total time is known and within `max_minutes`.
    pub fn is_quick(&self, max_minutes: u32) -> bool {
        matches!(self.total_time_minutes, Numeric::Value(t) if t <= max_minutes)
    }

    /// Case-insensitive substring match against every ingredient name.
    ///
    /// `needle` must already be lowercase.
    pub fn mentions_ingredient(&self, needle: &str) -> bool {
        self.ingredients
            .iter()
            .any(|ing| ing.name.to_lowercase().contains(needle))
    }

    /// Whether any numeric cell of this row failed to parse.
    pub fn has_unparsed_fields(&self) -> bool {
        self.id.is_unparsed()
            || self.total_time_minutes.is_unparsed()
            || self.ingredients.iter().any(|i| i.quantity.is_unparsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: Numeric::Value(3),
            name: "Masala Omelette".to_string(),
            total_time_minutes: Numeric::Value(15),
            tags: ["Contains-Egg".to_string()].into_iter().collect(),
            ingredients: vec![
                Ingredient::new("Eggs", 2.0, "piece"),
                Ingredient::new("Red Onion", 0.5, "piece"),
            ],
        }
    }

    #[test]
    fn test_numeric_parse() {
        assert_eq!(Numeric::<u32>::parse(" 42 "), Numeric::Value(42));
        assert_eq!(Numeric::<u32>::parse("forty"), Numeric::Unparsed);
        assert_eq!(Numeric::<u32>::parse(""), Numeric::Unparsed);
        assert_eq!(Numeric::parse_finite("1.5"), Numeric::Value(1.5));
        assert_eq!(Numeric::parse_finite("NaN"), Numeric::Unparsed);
    }

    #[test]
    fn test_is_quick_with_unparsed_time() {
        let mut recipe = sample_recipe();
        assert!(recipe.is_quick(40));

        recipe.total_time_minutes = Numeric::Unparsed;
        assert!(!recipe.is_quick(40));
        assert!(!recipe.is_quick(u32::MAX));
    }

    #[test]
    fn test_mentions_ingredient_case_insensitive() {
        let recipe = sample_recipe();
        assert!(recipe.mentions_ingredient("onion"));
        assert!(recipe.mentions_ingredient("egg"));
        assert!(!recipe.mentions_ingredient("paneer"));
    }

    #[test]
    fn test_scaled_keeps_unparsed() {
        let ing = Ingredient {
            name: "Salt".to_string(),
            quantity: Numeric::Unparsed,
            unit: "tsp".to_string(),
        };
        assert!(ing.scaled(2.0).quantity.is_unparsed());

        let doubled = Ingredient::new("Rice", 1.5, "cup").scaled(2.0);
        assert_eq!(doubled.quantity, Numeric::Value(3.0));
    }
}
