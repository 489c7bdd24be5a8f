//! Integration tests for loading store settings from TOML.

mod common;

use std::io::Write;

use common::*;

#[test]
fn test_load_partial_config() -> anyhow::Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "initial_view = \"goals\"")?;
    writeln!(file, "selected_city = \"Istanbul\"")?;
    writeln!(file, "table_rows = 4")?;

    let config = StoreConfig::load(file.path())?;

    assert_eq!(config.initial_view, ViewKind::Goals);
    assert_eq!(config.selected_city, "Istanbul");
    assert_eq!(config.table_rows, 4);
    // Missing keys keep their defaults
    assert_eq!(config.table_columns, 25);
    assert!(config.sidebar_open);
    assert_eq!(config.selected_week, 1);

    let store = create_test_store_with(&config);
    assert_eq!(store.current_view(), ViewKind::Goals);
    assert_eq!(store.table_stats().total_cells, 100);

    Ok(())
}

#[test]
fn test_empty_config_is_default() -> anyhow::Result<()> {
    assert_eq!(StoreConfig::from_toml("")?, StoreConfig::default());
    Ok(())
}

#[test]
fn test_bad_config_is_reported() -> anyhow::Result<()> {
    assert!(StoreConfig::from_toml("initial_view = \"calendar\"").is_err());

    let dir = tempfile::TempDir::new()?;
    let missing = dir.path().join("missing.toml");
    let result = StoreConfig::load(&missing);
    assert!(result.is_err());
    let error_msg = format!("{:#}", result.unwrap_err());
    assert!(error_msg.contains("missing.toml"), "got: {}", error_msg);

    Ok(())
}
