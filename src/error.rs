use std::path::PathBuf;

use thiserror::Error;

use crate::data::Table;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error(
        "Failed to load the {table} table: {source}. If it is a published sheet, open File > Share > Share with others and set General access to 'Anyone with the link can view'."
    )]
    Fetch {
        table: Table,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read the {table} table from {}: {source}", .path.display())]
    ReadTable {
        table: Table,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse the {table} table: {source}")]
    Parse {
        table: Table,
        #[source]
        source: csv::Error,
    },

    #[error("The {0} table has no usable rows")]
    EmptyTable(Table),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
