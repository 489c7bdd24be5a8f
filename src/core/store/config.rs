use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::core::store::state::ViewKind;

pub const DEFAULT_TABLE_ROWS: usize = 37;
pub const DEFAULT_TABLE_COLUMNS: usize = 25;

/// Startup settings for a store. Every field has a default, so a config file
/// only needs the keys it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub initial_view: ViewKind,
    pub sidebar_open: bool,
    pub selected_week: i64,
    pub selected_city: String,
    pub table_rows: usize,
    pub table_columns: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_view: ViewKind::Table,
            sidebar_open: true,
            selected_week: 1,
            selected_city: "New York".to_string(),
            table_rows: DEFAULT_TABLE_ROWS,
            table_columns: DEFAULT_TABLE_COLUMNS,
        }
    }
}

impl StoreConfig {
    /// Read a TOML config file.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        Self::from_toml(&raw).with_context(|| format!("Invalid config file {:?}", path))
    }

    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
