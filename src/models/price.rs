use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::models::Numeric;

static MAGNITUDE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d*\.?\d+").expect("magnitude pattern is valid"));

/// Unit a pack size is expressed in after derivation from its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BaseUnit {
    #[serde(rename = "g")]
    Grams,
    #[serde(rename = "ml")]
    Millilitres,
    #[serde(rename = "pieces")]
    Pieces,
    #[serde(rename = "units")]
    Units,
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BaseUnit::Grams => "g",
            BaseUnit::Millilitres => "ml",
            BaseUnit::Pieces => "pieces",
            BaseUnit::Units => "units",
        };
        f.write_str(s)
    }
}

/// Derive `(base_quantity, base_unit)` from a pack label such as `"1kg"`.
///
/// The magnitude is the first number in the label (1 if there is none).
/// Labels are matched case-insensitively in the order kg, g, ml, l; anything
/// else counts pieces. A missing label is one generic unit.
pub fn derive_pack_size(label: Option<&str>) -> (f64, BaseUnit) {
    let Some(label) = label.map(str::trim).filter(|l| !l.is_empty()) else {
        return (1.0, BaseUnit::Units);
    };

    let magnitude = MAGNITUDE
        .find(label)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(1.0);

    let lower = label.to_lowercase();
    if lower.contains("kg") {
        (magnitude * 1000.0, BaseUnit::Grams)
    } else if lower.contains('g') {
        (magnitude, BaseUnit::Grams)
    } else if lower.contains("ml") {
        (magnitude, BaseUnit::Millilitres)
    } else if lower.contains('l') {
        (magnitude * 1000.0, BaseUnit::Millilitres)
    } else {
        (magnitude, BaseUnit::Pieces)
    }
}

/// A row of the price table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceEntry {
    pub ingredient_name: String,
    pub price_per_pack: Numeric<f64>,
    pub pack_unit_label: Option<String>,
    /// Display only.
    pub brand: Option<String>,
    pub base_quantity: f64,
    pub base_unit: BaseUnit,
}

impl PriceEntry {
    pub fn new(
        ingredient_name: impl Into<String>,
        price_per_pack: Numeric<f64>,
        pack_unit_label: Option<String>,
        brand: Option<String>,
    ) -> Self {
        let (base_quantity, base_unit) = derive_pack_size(pack_unit_label.as_deref());
        Self {
            ingredient_name: ingredient_name.into(),
            price_per_pack,
            pack_unit_label,
            brand,
            base_quantity,
            base_unit,
        }
    }

    /// Cost of buying `quantity` base units at this pack price.
    ///
    /// `None` when the pack price is unparsed or the pack size is zero.
    pub fn cost_for(&self, quantity: f64) -> Option<f64> {
        let price = self.price_per_pack.value()?;
        if self.base_quantity <= 0.0 {
            return None;
        }
        Some((quantity / self.base_quantity) * price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_pack_size_labels() {
        assert_eq!(derive_pack_size(Some("1kg")), (1000.0, BaseUnit::Grams));
        assert_eq!(derive_pack_size(Some("500g")), (500.0, BaseUnit::Grams));
        assert_eq!(derive_pack_size(Some("500ml")), (500.0, BaseUnit::Millilitres));
        assert_eq!(derive_pack_size(Some("2 L")), (2000.0, BaseUnit::Millilitres));
        assert_eq!(derive_pack_size(Some("2 pieces")), (2.0, BaseUnit::Pieces));
        assert_eq!(derive_pack_size(Some("1.5kg")), (1500.0, BaseUnit::Grams));
    }

    #[test]
    fn test_derive_pack_size_leading_dot() {
        assert_eq!(derive_pack_size(Some(".5kg")), (500.0, BaseUnit::Grams));
        assert_eq!(derive_pack_size(Some("0.25 l")), (250.0, BaseUnit::Millilitres));
        assert_eq!(derive_pack_size(Some("3. pieces")), (3.0, BaseUnit::Pieces));
    }

    #[test]
    fn test_derive_pack_size_defaults() {
        assert_eq!(derive_pack_size(None), (1.0, BaseUnit::Units));
        assert_eq!(derive_pack_size(Some("  ")), (1.0, BaseUnit::Units));
        assert_eq!(derive_pack_size(Some("piece")), (1.0, BaseUnit::Pieces));
        assert_eq!(derive_pack_size(Some("kg")), (1000.0, BaseUnit::Grams));
    }

    #[test]
    fn test_cost_for() {
        let entry = PriceEntry::new("Rice", Numeric::Value(2.5), Some("1kg".to_string()), None);
        let cost = entry.cost_for(400.0).unwrap();
        assert!((cost - 1.0).abs() < 1e-9);

        let unpriced = PriceEntry::new("Rice", Numeric::Unparsed, Some("1kg".to_string()), None);
        assert!(unpriced.cost_for(400.0).is_none());

        let zero = PriceEntry::new("Rice", Numeric::Value(2.5), Some("0g".to_string()), None);
        assert!(zero.cost_for(400.0).is_none());
    }
}
