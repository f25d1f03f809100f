use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::models::{Numeric, PlannedMeal, Recipe, Shortfall};
use crate::planner::constants::{EGG_TAG, QUICK_DINNER_MAX_MINUTES};

/// Per-slot restrictions applied on top of the no-repeat window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionRules {
    pub no_egg: bool,
    pub quick_only: bool,
}

impl SelectionRules {
    pub fn allows(&self, recipe: &Recipe) -> bool {
        if self.no_egg && recipe.has_tag(EGG_TAG) {
            return false;
        }
        if self.quick_only && !recipe.is_quick(QUICK_DINNER_MAX_MINUTES) {
            return false;
        }
        true
    }
}

/// Outcome of one draw: the meal for the slot and the id to remember.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub meal: PlannedMeal,
    /// `None` for placeholders and for recipes whose id did not parse.
    pub id: Option<u32>,
}

impl Selection {
    fn shortfall(reason: Shortfall) -> Self {
        Self {
            meal: PlannedMeal::unavailable(reason),
            id: None,
        }
    }
}

fn is_fresh(recipe: &Recipe, excluded: &HashSet<u32>) -> bool {
    matches!(recipe.id, Numeric::Value(id) if !excluded.contains(&id))
}

/// Pick a meal from `pool` uniformly at random.
///
/// Recipes in `excluded` are avoided while any other recipe satisfies
/// `rules`. If none does, the no-repeat window is dropped and the rules are
/// applied to the whole pool. An empty pool gives [`Shortfall::DataError`];
/// a pool with nothing passing the rules gives [`Shortfall::NoMealFound`].
pub fn select_meal<R: Rng + ?Sized>(
    pool: &[Recipe],
    excluded: &HashSet<u32>,
    rules: SelectionRules,
    rng: &mut R,
) -> Selection {
    if pool.is_empty() {
        return Selection::shortfall(Shortfall::DataError);
    }

    let mut candidates: Vec<&Recipe> = pool
        .iter()
        .filter(|r| is_fresh(r, excluded))
        .filter(|r| rules.allows(r))
        .collect();

    if candidates.is_empty() {
        debug!(?rules, excluded = excluded.len(), "no fresh candidates, allowing repeats");
        candidates = pool.iter().filter(|r| rules.allows(r)).collect();
    }

    match candidates.choose(rng) {
        Some(recipe) => Selection {
            meal: PlannedMeal::dish((*recipe).clone()),
            id: recipe.id.value(),
        },
        None => {
            warn!(?rules, pool = pool.len(), "no recipe satisfies the slot rules");
            Selection::shortfall(Shortfall::NoMealFound)
        }
    }
}
