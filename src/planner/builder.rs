use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::data::{RecipePools, Table};
use crate::models::{DayPlan, Lunch, PlannedMeal, Recipe, Shortfall, WeeklyPlan, Weekday};
use crate::planner::constants::is_no_egg_day;
use crate::planner::selector::{select_meal, SelectionRules};

/// Household choices for one planning run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub use_leftovers: bool,
    /// Day whose dinner is drawn from the breakfast pool.
    pub tiffin_night: Option<Weekday>,
    /// Day whose dinner must be quick to cook.
    pub quick_dinner_day: Option<Weekday>,
    /// Drop recipes with an ingredient containing this text (any case).
    pub avoid_ingredient: String,
}

/// Recipes already served in one slot category this week.
///
/// Ids are only unique within their own table, so entries are keyed by the
/// table the recipe was drawn from.
#[derive(Debug, Default)]
struct UsedWindow {
    seen: HashSet<(Table, u32)>,
}

impl UsedWindow {
    /// Ids from `table` that this window has seen.
    fn ids_from(&self, table: Table) -> HashSet<u32> {
        self.seen
            .iter()
            .filter(|(t, _)| *t == table)
            .map(|(_, id)| *id)
            .collect()
    }

    fn record(&mut self, table: Table, id: Option<u32>) {
        self.seen.extend(id.map(|id| (table, id)));
    }
}

/// Any recipe from `pool`, with no repeat tracking.
fn pick_any<R: Rng + ?Sized>(pool: &[Recipe], rng: &mut R) -> PlannedMeal {
    pool.choose(rng)
        .cloned()
        .map(PlannedMeal::dish)
        .unwrap_or(PlannedMeal::unavailable(Shortfall::DataError))
}

fn draw_lunch<R: Rng + ?Sized>(pools: &RecipePools, no_egg: bool, rng: &mut R) -> Lunch {
    let main = pick_any(&pools.lunch_mains, rng);
    let veg_side = pick_any(&pools.lunch_veg_sides, rng);
    let non_veg_side = if no_egg {
        None
    } else {
        pools
            .lunch_non_veg_sides
            .choose(rng)
            .cloned()
            .map(PlannedMeal::dish)
    };

    Lunch::Composite {
        main,
        veg_side,
        non_veg_side,
    }
}

/// Build a Monday to Sunday plan.
///
/// Breakfast and dinner each keep their own no-repeat window. On the tiffin
/// night the dinner comes from the breakfast pool but is still remembered in
/// the dinner window, keyed by its table so it never blocks a dinner id.
/// Lunch parts are drawn freely; egg-restricted days get no non-veg side.
/// The leftovers rule runs once the week is complete.
pub fn build_weekly_plan<R: Rng + ?Sized>(
    pools: &RecipePools,
    prefs: &Preferences,
    rng: &mut R,
) -> WeeklyPlan {
    let pools = pools.without_ingredient(&prefs.avoid_ingredient);

    let mut used_breakfast = UsedWindow::default();
    let mut used_dinner = UsedWindow::default();
    let mut plan = WeeklyPlan::new();

    for day in Weekday::ALL {
        let no_egg = is_no_egg_day(day);

        let (dinner_table, dinner_rules) = if prefs.tiffin_night == Some(day) {
            (
                Table::Breakfast,
                SelectionRules {
                    no_egg,
                    quick_only: false,
                },
            )
        } else {
            (
                Table::Dinner,
                SelectionRules {
                    no_egg,
                    quick_only: prefs.quick_dinner_day == Some(day),
                },
            )
        };
        let dinner_pool = pools.pool(dinner_table).unwrap_or_default();
        let dinner = select_meal(
            dinner_pool,
            &used_dinner.ids_from(dinner_table),
            dinner_rules,
            rng,
        );
        used_dinner.record(dinner_table, dinner.id);

        let breakfast_rules = SelectionRules {
            no_egg,
            quick_only: false,
        };
        let breakfast = select_meal(
            &pools.breakfast,
            &used_breakfast.ids_from(Table::Breakfast),
            breakfast_rules,
            rng,
        );
        used_breakfast.record(Table::Breakfast, breakfast.id);

        let lunch = draw_lunch(&pools, no_egg, rng);

        plan.insert(
            day,
            DayPlan {
                breakfast: breakfast.meal,
                lunch,
                dinner: dinner.meal,
            },
        );
    }

    if prefs.use_leftovers {
        apply_leftovers(&mut plan);
    }

    plan
}

/// Turn Sunday's dinner into Monday's lunch.
///
/// Marks Sunday's dinner as a leftover source (doubling its shopping
/// quantities) and replaces Monday's lunch with a label. A placeholder
/// Sunday dinner leaves the plan untouched, so Monday keeps its composite
/// lunch instead of a `Leftovers: No meal found!` entry. Returns whether the
/// rule fired.
pub fn apply_leftovers(plan: &mut WeeklyPlan) -> bool {
    let dinner_name = match plan.get_mut(Weekday::Sunday).map(|day| &mut day.dinner) {
        Some(PlannedMeal::Dish(dish)) => {
            dish.is_leftover_source = true;
            dish.recipe.name.clone()
        }
        _ => return false,
    };

    if let Some(monday) = plan.get_mut(Weekday::Monday) {
        monday.lunch = Lunch::leftovers_of(&dinner_name);
    }
    info!(dinner = %dinner_name, "Sunday dinner doubled for Monday lunch");
    true
}
