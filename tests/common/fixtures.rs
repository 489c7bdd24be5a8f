use planboard::core::store::{AppState, AppStore, FixedClock, SequentialIds, StoreConfig};
use time::OffsetDateTime;

/// 2024-01-15T10:00:00Z
pub const TEST_UNIX_TIME: i64 = 1_705_312_800;
pub const TEST_DATE: &str = "2024-01-15";
pub const TEST_TIMESTAMP: &str = "2024-01-15T10:00:00.000Z";

pub fn test_instant() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(TEST_UNIX_TIME).expect("Test timestamp in range")
}

/// Creates a default-seeded store with predictable ids (`prefix-1000`,
/// `prefix-1001`, ...) and a clock frozen at `test_instant()`.
pub fn create_test_store() -> AppStore {
    create_test_store_with(&StoreConfig::default())
}

pub fn create_test_store_with(config: &StoreConfig) -> AppStore {
    AppStore::new(config)
        .with_id_source(SequentialIds::default())
        .with_clock(FixedClock(test_instant()))
}

/// Owned copy of the current state, for before/after comparisons.
pub fn snapshot(store: &AppStore) -> AppState {
    store.state().clone()
}
