pub mod inventory;
pub mod repository;
pub mod snapshot;

pub use crate::domain::model::{Category, Product, ProductDetails};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
