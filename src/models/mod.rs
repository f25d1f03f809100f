pub mod plan;
pub mod price;
pub mod recipe;
pub mod shopping;

pub use plan::{DayPlan, Dish, Lunch, PlannedMeal, Shortfall, WeeklyPlan, Weekday};
pub use price::{derive_pack_size, BaseUnit, PriceEntry};
pub use recipe::{Ingredient, Numeric, Recipe};
pub use shopping::{ShoppingList, ShoppingListEntry};
