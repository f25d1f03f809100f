use std::collections::{BTreeSet, HashMap};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::{PriceEntry, Recipe};

/// The six tables a planning run reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Table {
    Breakfast,
    Dinner,
    #[serde(rename = "Lunch_Mains")]
    LunchMains,
    #[serde(rename = "Lunch_Veg_Sides")]
    LunchVegSides,
    #[serde(rename = "Lunch_Non_Veg_Sides")]
    LunchNonVegSides,
    Prices,
}

impl Table {
    pub const ALL: [Table; 6] = [
        Table::Breakfast,
        Table::Dinner,
        Table::LunchMains,
        Table::LunchVegSides,
        Table::LunchNonVegSides,
        Table::Prices,
    ];

    /// Sheet name, also used as the CSV file stem.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            Table::Breakfast => "Breakfast",
            Table::Dinner => "Dinner",
            Table::LunchMains => "Lunch_Mains",
            Table::LunchVegSides => "Lunch_Veg_Sides",
            Table::LunchNonVegSides => "Lunch_Non_Veg_Sides",
            Table::Prices => "Prices",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.csv", self.sheet_name())
    }

    /// Tables without which no plan can be generated.
    pub fn is_essential(&self) -> bool {
        matches!(self, Table::Breakfast | Table::Dinner | Table::Prices)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_name())
    }
}

/// Candidate recipes for each slot category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipePools {
    pub breakfast: Vec<Recipe>,
    pub dinner: Vec<Recipe>,
    pub lunch_mains: Vec<Recipe>,
    pub lunch_veg_sides: Vec<Recipe>,
    pub lunch_non_veg_sides: Vec<Recipe>,
}

impl RecipePools {
    pub fn pool(&self, table: Table) -> Option<&[Recipe]> {
        match table {
            Table::Breakfast => Some(&self.breakfast),
            Table::Dinner => Some(&self.dinner),
            Table::LunchMains => Some(&self.lunch_mains),
            Table::LunchVegSides => Some(&self.lunch_veg_sides),
            Table::LunchNonVegSides => Some(&self.lunch_non_veg_sides),
            Table::Prices => None,
        }
    }

    /// Copy of every pool without recipes that use `avoid`.
    ///
    /// Matching is a case-insensitive substring test on ingredient names.
    /// An empty or blank `avoid` keeps everything.
    pub fn without_ingredient(&self, avoid: &str) -> RecipePools {
        let needle = avoid.trim().to_lowercase();
        let keep = |pool: &[Recipe]| -> Vec<Recipe> {
            pool.iter()
                .filter(|r| needle.is_empty() || !r.mentions_ingredient(&needle))
                .cloned()
                .collect()
        };

        RecipePools {
            breakfast: keep(&self.breakfast),
            dinner: keep(&self.dinner),
            lunch_mains: keep(&self.lunch_mains),
            lunch_veg_sides: keep(&self.lunch_veg_sides),
            lunch_non_veg_sides: keep(&self.lunch_non_veg_sides),
        }
    }

    pub fn all_recipes(&self) -> impl Iterator<Item = (Table, &Recipe)> {
        Table::ALL.into_iter().flat_map(move |table| {
            self.pool(table)
                .unwrap_or_default()
                .iter()
                .map(move |r| (table, r))
        })
    }
}

/// Everything a planning run needs, loaded once up front.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub pools: RecipePools,
    pub prices: HashMap<String, PriceEntry>,
}

impl Dataset {
    /// Assemble a dataset, rejecting empty essential tables.
    pub fn new(pools: RecipePools, prices: HashMap<String, PriceEntry>) -> Result<Self> {
        if pools.breakfast.is_empty() {
            return Err(PlannerError::EmptyTable(Table::Breakfast));
        }
        if pools.dinner.is_empty() {
            return Err(PlannerError::EmptyTable(Table::Dinner));
        }
        if prices.is_empty() {
            return Err(PlannerError::EmptyTable(Table::Prices));
        }
        Ok(Self { pools, prices })
    }

    pub fn row_count(&self, table: Table) -> usize {
        match self.pools.pool(table) {
            Some(pool) => pool.len(),
            None => self.prices.len(),
        }
    }

    /// Distinct ingredient names used by any recipe.
    pub fn ingredient_names(&self) -> BTreeSet<String> {
        self.pools
            .all_recipes()
            .flat_map(|(_, r)| r.ingredients.iter().map(|i| i.name.clone()))
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Ingredient names with no row in the price table.
    pub fn unpriced_ingredients(&self) -> BTreeSet<String> {
        self.ingredient_names()
            .into_iter()
            .filter(|name| !self.prices.contains_key(name))
            .collect()
    }
}
