use crate::core::inventory::SearchCriterion;
use crate::domain::model::{Category, Product};
use crate::utils::error::{InventoryError, Result};
use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add a new product
    Add {
        #[command(subcommand)]
        product: AddProduct,
    },
    /// Sell units of a product
    Sell {
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Add units to a product
    Restock {
        id: String,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Delete a product
    Remove { id: String },
    /// Find products by name or category
    Search(SearchArgs),
    /// Show every product
    List,
    /// Drop groceries past their expiry date
    RemoveExpired,
    /// Print the total inventory value
    Value,
}

#[derive(Debug, Clone, Args)]
pub struct BaseArgs {
    #[arg(long)]
    pub id: String,
    #[arg(long)]
    pub name: String,
    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,
    #[arg(long, allow_negative_numbers = true)]
    pub quantity: i64,
}

#[derive(Debug, Clone, Subcommand)]
pub enum AddProduct {
    Electronics {
        #[command(flatten)]
        base: BaseArgs,
        #[arg(long, allow_negative_numbers = true)]
        warranty_months: i64,
        #[arg(long)]
        brand: String,
    },
    Grocery {
        #[command(flatten)]
        base: BaseArgs,
        #[arg(long, help = "Expiry date (YYYY-MM-DD)")]
        expiry_date: NaiveDate,
    },
    Clothing {
        #[command(flatten)]
        base: BaseArgs,
        #[arg(long)]
        size: String,
        #[arg(long)]
        material: String,
    },
}

impl AddProduct {
    pub fn into_product(self) -> Result<Product> {
        match self {
            AddProduct::Electronics {
                base,
                warranty_months,
                brand,
            } => Product::electronics(
                base.id,
                base.name,
                base.price,
                base.quantity,
                warranty_months,
                brand,
            ),
            AddProduct::Grocery { base, expiry_date } => {
                Product::grocery(base.id, base.name, base.price, base.quantity, expiry_date)
            }
            AddProduct::Clothing {
                base,
                size,
                material,
            } => Product::clothing(
                base.id,
                base.name,
                base.price,
                base.quantity,
                size,
                material,
            ),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct SearchArgs {
    #[arg(long, conflicts_with = "category", required_unless_present = "category")]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<Category>,
}

impl SearchArgs {
    pub fn criterion(&self) -> Result<SearchCriterion> {
        match (&self.name, self.category) {
            (Some(name), None) => Ok(SearchCriterion::Name(name.clone())),
            (None, Some(category)) => Ok(SearchCriterion::Category(category)),
            _ => Err(InventoryError::invalid_data(
                "search",
                "<arguments>",
                "Give exactly one of --name or --category",
            )),
        }
    }
}
