use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::Weekday;
use crate::planner::Preferences;

/// Smart Week: plan a week of meals and price the shopping list.
#[derive(Parser, Debug)]
#[command(name = "smart_week")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Where recipe and price tables are read from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Directory holding Breakfast.csv, Dinner.csv, ..., Prices.csv.
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Path to the JSON sheet config used when no data directory is given.
    #[arg(short, long, global = true, default_value = "smart_week.json")]
    pub config: PathBuf,
}

/// Planning preferences and output options.
#[derive(Args, Debug, Clone, Default)]
pub struct PlanArgs {
    /// Cook Sunday's dinner twice over and eat it for Monday's lunch.
    #[arg(long)]
    pub leftovers: bool,

    /// Day whose dinner is a breakfast-style tiffin.
    #[arg(long, value_name = "DAY")]
    pub tiffin_night: Option<Weekday>,

    /// Day whose dinner must take 40 minutes or less.
    #[arg(long, value_name = "DAY")]
    pub quick_dinner: Option<Weekday>,

    /// Skip recipes with an ingredient containing this text.
    #[arg(long, value_name = "TEXT", default_value = "")]
    pub avoid: String,

    /// Ask for preferences interactively instead of using flags.
    #[arg(short, long)]
    pub interactive: bool,

    /// Seed for a reproducible plan.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the plan and shopping list as JSON.
    #[arg(long)]
    pub json: bool,
}

impl PlanArgs {
    pub fn preferences(&self) -> Preferences {
        Preferences {
            use_leftovers: self.leftovers,
            tiffin_night: self.tiffin_night,
            quick_dinner_day: self.quick_dinner,
            avoid_ingredient: self.avoid.trim().to_string(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a weekly meal plan and shopping list.
    Plan(PlanArgs),

    /// Load every table and report rows, unparsed cells and unpriced ingredients.
    Check,
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan(PlanArgs::default())
    }
}
