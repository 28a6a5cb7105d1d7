#[cfg(feature = "cli")]
pub mod app;
pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::storage::LocalStorage;
pub use crate::config::toml_config::TomlConfig;
pub use crate::core::inventory::{Inventory, SearchCriterion};
pub use crate::core::repository::SnapshotRepository;
pub use crate::domain::model::{Category, Product, ProductDetails};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::{InventoryError, Result};
