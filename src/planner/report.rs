use rand::Rng;
use serde::Serialize;

use crate::data::Dataset;
use crate::models::{ShoppingList, WeeklyPlan};
use crate::planner::builder::{build_weekly_plan, Preferences};
use crate::planner::shopping::build_shopping_list;

/// A generated week together with what it costs to shop for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    pub plan: WeeklyPlan,
    pub shopping_list: ShoppingList,
    pub total_cost: f64,
}

/// Plan a week from a loaded dataset and price its shopping list.
///
/// Purely synchronous: everything it needs is already in `dataset`.
pub fn generate_plan<R: Rng + ?Sized>(
    dataset: &Dataset,
    prefs: &Preferences,
    rng: &mut R,
) -> PlanReport {
    let plan = build_weekly_plan(&dataset.pools, prefs, rng);
    let shopping_list = build_shopping_list(&plan, &dataset.prices);
    let total_cost = shopping_list.total_cost();

    PlanReport {
        plan,
        shopping_list,
        total_cost,
    }
}
