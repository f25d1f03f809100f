pub mod dataset;
pub mod parser;
pub mod source;

pub use dataset::{Dataset, RecipePools, Table};
pub use parser::{parse_price_table, parse_recipe_table};
pub use source::{load_dataset, DirectorySource, SheetSource, TableSource, SHEETS_BASE_URL};
