pub mod prompts;
pub mod render;

pub use prompts::{
    collect_preferences, prompt_avoid_ingredient, prompt_day, prompt_yes_no, suggest_ingredients,
};
pub use render::{
    display_dataset_report, display_shopping_list, display_weekly_plan, format_cost,
    format_shopping_line, plan_rows,
};
