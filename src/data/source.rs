use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use crate::data::dataset::{Dataset, RecipePools, Table};
use crate::data::parser::{parse_price_table, parse_recipe_table};
use crate::error::{PlannerError, Result};
use crate::models::{PriceEntry, Recipe};

/// Somewhere the six tables can be read from as CSV text.
#[async_trait]
pub trait TableSource: Send + Sync {
    async fn fetch(&self, table: Table) -> Result<String>;
}

/// Reads `<dir>/<Table>.csv` files.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, table: Table) -> PathBuf {
        self.dir.join(table.file_name())
    }
}

#[async_trait]
impl TableSource for DirectorySource {
    async fn fetch(&self, table: Table) -> Result<String> {
        let path = self.path_for(table);
        debug!(%table, path = %path.display(), "reading table file");
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| PlannerError::ReadTable {
                table,
                path,
                source,
            })
    }
}

/// Where published spreadsheets are served from.
pub const SHEETS_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";

/// Reads tabs of a published spreadsheet through its CSV export URL.
#[derive(Debug, Clone)]
pub struct SheetSource {
    client: Client,
    base_url: String,
    spreadsheet_id: String,
    gids: HashMap<Table, String>,
}

impl SheetSource {
    pub fn new(spreadsheet_id: impl Into<String>, gids: HashMap<Table, String>) -> Self {
        Self {
            client: Client::new(),
            base_url: SHEETS_BASE_URL.to_string(),
            spreadsheet_id: spreadsheet_id.into(),
            gids,
        }
    }

    /// Serve exports from another host, e.g. a mirror or a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// CSV export URL for a table, if a gid is configured for it.
    pub fn url_for(&self, table: Table) -> Option<String> {
        self.gids.get(&table).map(|gid| {
            format!(
                "{}/{}/export?format=csv&gid={}",
                self.base_url, self.spreadsheet_id, gid
            )
        })
    }
}

#[async_trait]
impl TableSource for SheetSource {
    async fn fetch(&self, table: Table) -> Result<String> {
        let url = self
            .url_for(table)
            .ok_or_else(|| PlannerError::Config(format!("no gid configured for {}", table)))?;
        debug!(%table, %url, "fetching sheet");

        let fetch = async {
            self.client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .text()
                .await
        };
        fetch
            .await
            .map_err(|source| PlannerError::Fetch { table, source })
    }
}

async fn load_recipes<S: TableSource + ?Sized>(source: &S, table: Table) -> Result<Vec<Recipe>> {
    let text = source.fetch(table).await?;
    let recipes =
        parse_recipe_table(&text).map_err(|source| PlannerError::Parse { table, source })?;
    info!(%table, rows = recipes.len(), "loaded recipes");
    Ok(recipes)
}

async fn load_prices<S: TableSource + ?Sized>(source: &S) -> Result<HashMap<String, PriceEntry>> {
    let table = Table::Prices;
    let text = source.fetch(table).await?;
    let prices =
        parse_price_table(&text).map_err(|source| PlannerError::Parse { table, source })?;
    info!(%table, rows = prices.len(), "loaded prices");
    Ok(prices)
}

/// Fetch and parse all six tables concurrently.
///
/// Any failing table fails the whole load; no partial dataset is returned.
pub async fn load_dataset<S: TableSource + ?Sized>(source: &S) -> Result<Dataset> {
    let (breakfast, dinner, lunch_mains, lunch_veg_sides, lunch_non_veg_sides, prices) = tokio::try_join!(
        load_recipes(source, Table::Breakfast),
        load_recipes(source, Table::Dinner),
        load_recipes(source, Table::LunchMains),
        load_recipes(source, Table::LunchVegSides),
        load_recipes(source, Table::LunchNonVegSides),
        load_prices(source),
    )?;

    Dataset::new(
        RecipePools {
            breakfast,
            dinner,
            lunch_mains,
            lunch_veg_sides,
            lunch_non_veg_sides,
        },
        prices,
    )
}
