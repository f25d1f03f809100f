use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::data::{DirectorySource, SheetSource, Table, TableSource};
use crate::error::{PlannerError, Result};

/// Where a published spreadsheet lives and which tab holds each table.
///
/// ```json
/// { "spreadsheet_id": "1hSO...", "gids": { "Breakfast": "0", "Prices": "1164801127" } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetConfig {
    pub spreadsheet_id: String,
    pub gids: HashMap<Table, String>,
}

impl SheetConfig {
    /// Load and validate a JSON sheet config.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: SheetConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Every table needs a gid and the spreadsheet id must be set.
    pub fn validate(&self) -> Result<()> {
        if self.spreadsheet_id.trim().is_empty() {
            return Err(PlannerError::Config("spreadsheet_id is empty".to_string()));
        }

        let missing: Vec<&str> = Table::ALL
            .iter()
            .filter(|t| self.gids.get(t).is_none_or(|gid| gid.trim().is_empty()))
            .map(|t| t.sheet_name())
            .collect();

        if !missing.is_empty() {
            return Err(PlannerError::Config(format!(
                "missing gid for {}",
                missing.join(", ")
            )));
        }
        Ok(())
    }
}

/// Pick the table source: a CSV directory if given, else the sheet config.
pub fn resolve_source(
    data_dir: Option<&Path>,
    config_path: &Path,
) -> Result<Box<dyn TableSource>> {
    if let Some(dir) = data_dir {
        if !dir.is_dir() {
            return Err(PlannerError::Config(format!(
                "data directory not found: {}",
                dir.display()
            )));
        }
        return Ok(Box::new(DirectorySource::new(PathBuf::from(dir))));
    }

    if !config_path.exists() {
        return Err(PlannerError::Config(format!(
            "no --data-dir given and sheet config {} not found",
            config_path.display()
        )));
    }

    let config = SheetConfig::load(config_path)?;
    Ok(Box::new(SheetSource::new(config.spreadsheet_id, config.gids)))
}
