use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::models::Recipe;

/// Days of the planning week, in plan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = String;

    /// Accepts full names or three-letter abbreviations, any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Weekday::ALL
            .into_iter()
            .find(|d| {
                let name = d.name().to_lowercase();
                name == needle || (needle.len() == 3 && name.starts_with(&needle))
            })
            .ok_or_else(|| format!("unknown day '{}'", s.trim()))
    }
}

/// Why a slot holds a placeholder instead of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shortfall {
    /// The pool to draw from was empty.
    DataError,
    /// Every recipe in the pool was ruled out, even after relaxing repeats.
    NoMealFound,
}

impl fmt::Display for Shortfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shortfall::DataError => f.write_str("Data Error!"),
            Shortfall::NoMealFound => f.write_str("No meal found!"),
        }
    }
}

/// A recipe placed in the plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dish {
    pub recipe: Recipe,
    /// Cooked in double quantity so it also covers the next day's lunch.
    pub is_leftover_source: bool,
}

/// Contents of one meal slot.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlannedMeal {
    Dish(Dish),
    Unavailable { reason: Shortfall },
}

impl PlannedMeal {
    pub fn dish(recipe: Recipe) -> Self {
        PlannedMeal::Dish(Dish {
            recipe,
            is_leftover_source: false,
        })
    }

    pub fn unavailable(reason: Shortfall) -> Self {
        PlannedMeal::Unavailable { reason }
    }

    pub fn name(&self) -> String {
        match self {
            PlannedMeal::Dish(dish) => dish.recipe.name.clone(),
            PlannedMeal::Unavailable { reason } => reason.to_string(),
        }
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        match self {
            PlannedMeal::Dish(dish) => Some(&dish.recipe),
            PlannedMeal::Unavailable { .. } => None,
        }
    }

    pub fn is_leftover_source(&self) -> bool {
        matches!(self, PlannedMeal::Dish(dish) if dish.is_leftover_source)
    }
}

/// The lunch slot: a main with sides, or a label-only leftovers entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Lunch {
    Composite {
        main: PlannedMeal,
        veg_side: PlannedMeal,
        non_veg_side: Option<PlannedMeal>,
    },
    Leftovers {
        label: String,
    },
}

impl Lunch {
    pub fn leftovers_of(dinner_name: &str) -> Self {
        Lunch::Leftovers {
            label: format!("Leftovers: {}", dinner_name),
        }
    }

    pub fn non_veg_side(&self) -> Option<&PlannedMeal> {
        match self {
            Lunch::Composite { non_veg_side, .. } => non_veg_side.as_ref(),
            Lunch::Leftovers { .. } => None,
        }
    }

    /// Single-line description used in the plan table.
    pub fn describe(&self) -> String {
        match self {
            Lunch::Composite {
                main,
                veg_side,
                non_veg_side,
            } => match non_veg_side {
                Some(side) => format!("{} + {} + {}", main.name(), veg_side.name(), side.name()),
                None => format!("{} + {} (Veg)", main.name(), veg_side.name()),
            },
            Lunch::Leftovers { label } => label.clone(),
        }
    }

    /// Meals that need shopping. Leftovers contribute nothing here.
    pub fn meals(&self) -> Vec<&PlannedMeal> {
        match self {
            Lunch::Composite {
                main,
                veg_side,
                non_veg_side,
            } => {
                let mut meals = vec![main, veg_side];
                meals.extend(non_veg_side.as_ref());
                meals
            }
            Lunch::Leftovers { .. } => Vec::new(),
        }
    }
}

/// The three slots of one day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    pub breakfast: PlannedMeal,
    pub lunch: Lunch,
    pub dinner: PlannedMeal,
}

impl DayPlan {
    /// Every meal whose ingredients count towards the shopping list.
    pub fn contributing_meals(&self) -> Vec<&PlannedMeal> {
        let mut meals = vec![&self.breakfast, &self.dinner];
        meals.extend(self.lunch.meals());
        meals
    }
}

/// A week of day plans, always iterated Monday to Sunday.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct WeeklyPlan {
    days: BTreeMap<Weekday, DayPlan>,
}

impl WeeklyPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day: Weekday, plan: DayPlan) {
        self.days.insert(day, plan);
    }

    pub fn get(&self, day: Weekday) -> Option<&DayPlan> {
        self.days.get(&day)
    }

    pub fn get_mut(&mut self, day: Weekday) -> Option<&mut DayPlan> {
        self.days.get_mut(&day)
    }

    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DayPlan)> {
        self.days.iter().map(|(day, plan)| (*day, plan))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
