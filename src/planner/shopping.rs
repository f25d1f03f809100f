use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::{PriceEntry, ShoppingList, WeeklyPlan};
use crate::planner::constants::LEFTOVER_MULTIPLIER;
use crate::planner::normalize::standardize;

/// Sum standardized ingredient quantities over the week and price them.
///
/// Every breakfast, dinner and composite-lunch part contributes; a leftover
/// source counts double and a leftovers lunch contributes nothing itself.
pub fn build_shopping_list(
    plan: &WeeklyPlan,
    prices: &HashMap<String, PriceEntry>,
) -> ShoppingList {
    let mut list = ShoppingList::new();

    for (_, day) in plan.days() {
        for meal in day.contributing_meals() {
            let Some(recipe) = meal.recipe() else {
                continue;
            };
            let multiplier = if meal.is_leftover_source() {
                LEFTOVER_MULTIPLIER
            } else {
                1.0
            };

            for ingredient in recipe.ingredients.iter().filter(|i| !i.name.is_empty()) {
                let standard = standardize(&ingredient.scaled(multiplier));
                list.entry_mut(&ingredient.name)
                    .add(standard.quantity, &standard.unit);
            }
        }
    }

    estimate_costs(&mut list, prices);
    list
}

/// Fill in `estimated_cost` for every entry.
///
/// Cost is `(total quantity / pack base quantity) * pack price`. Missing
/// price rows, unparsed pack prices and unparsed quantities leave it unknown.
pub fn estimate_costs(list: &mut ShoppingList, prices: &HashMap<String, PriceEntry>) {
    for (name, entry) in list.iter_mut() {
        if entry.has_mixed_units() {
            let units: Vec<&str> = entry.units_seen().collect();
            warn!(
                ingredient = name,
                ?units,
                "quantities in different units are summed together"
            );
        }

        entry.estimated_cost = match prices.get(name) {
            Some(price) if entry.is_complete() => price.cost_for(entry.total_quantity()),
            Some(_) => None,
            None => {
                debug!(ingredient = name, "no price entry");
                None
            }
        };
    }
}
