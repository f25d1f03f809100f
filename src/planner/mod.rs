pub mod builder;
pub mod constants;
pub mod normalize;
pub mod report;
pub mod selector;
pub mod shopping;

pub use builder::{apply_leftovers, build_weekly_plan, Preferences};
pub use constants::*;
pub use normalize::{standardize, StandardQuantity};
pub use report::{generate_plan, PlanReport};
pub use selector::{select_meal, Selection, SelectionRules};
pub use shopping::{build_shopping_list, estimate_costs};
