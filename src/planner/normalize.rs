use serde::Serialize;

use crate::models::{Ingredient, Numeric};
use crate::planner::constants::{GRAMS, PASS_THROUGH_UNITS, VOLUME_CONVERSIONS};

/// A quantity expressed in its standardized unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardQuantity {
    pub quantity: Numeric<f64>,
    pub unit: String,
}

/// Convert an ingredient quantity into a unit usable for aggregation.
///
/// Atomic units and `g`/`ml` pass through. `cup`, `tbsp` and `tsp` become
/// grams using an ingredient override or the unit default. Unknown units
/// pass through unchanged. Never fails.
pub fn standardize(ingredient: &Ingredient) -> StandardQuantity {
    let unit = ingredient.unit.as_str();

    if PASS_THROUGH_UNITS.contains(&unit) {
        return StandardQuantity {
            quantity: ingredient.quantity,
            unit: unit.to_string(),
        };
    }

    match VOLUME_CONVERSIONS.get(unit) {
        Some(conversion) => {
            let grams = conversion.grams_for(&ingredient.name);
            StandardQuantity {
                quantity: ingredient.quantity.map(|q| q * grams),
                unit: GRAMS.to_string(),
            }
        }
        None => StandardQuantity {
            quantity: ingredient.quantity,
            unit: unit.to_string(),
        },
    }
}
