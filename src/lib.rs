pub mod core;

pub use crate::core::store::{AppState, AppStore, StoreConfig, ViewKind};
