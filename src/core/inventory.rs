use crate::domain::model::{Category, Product};
use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::{validate_positive, validate_positive_count};
use chrono::{Local, NaiveDate};
use std::collections::HashMap;

/// Search filter for [`Inventory::search`].
#[derive(Debug, Clone, PartialEq)]
pub enum SearchCriterion {
    /// Case-insensitive substring of the product name.
    Name(String),
    /// Exact category match.
    Category(Category),
}

impl SearchCriterion {
    fn matcher(&self) -> impl Fn(&Product) -> bool {
        let criterion = match self {
            SearchCriterion::Name(needle) => SearchCriterion::Name(needle.to_lowercase()),
            other => other.clone(),
        };
        move |product: &Product| match &criterion {
            SearchCriterion::Name(needle) => product.name().to_lowercase().contains(needle.as_str()),
            SearchCriterion::Category(category) => product.category() == *category,
        }
    }
}

/// In-memory product collection keyed by ID, iterated in insertion order.
///
/// Single owner, single thread of control: callers must not save a snapshot
/// while another part of the program is mutating the same inventory.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    products: HashMap<String, Product>,
    order: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inventory, rejecting duplicate IDs.
    pub fn from_products<I>(products: I) -> Result<Self>
    where
        I: IntoIterator<Item = Product>,
    {
        let mut inventory = Self::new();
        for product in products {
            inventory.add(product)?;
        }
        Ok(inventory)
    }

    pub fn add(&mut self, product: Product) -> Result<()> {
        if self.products.contains_key(product.id()) {
            return Err(InventoryError::DuplicateId {
                id: product.id().to_string(),
            });
        }

        tracing::debug!("Adding {} product {}", product.category(), product.id());
        let id = product.id().to_string();
        self.order.push(id.clone());
        self.products.insert(id, product);
        Ok(())
    }

    pub fn sell(&mut self, id: &str, qty: i64) -> Result<()> {
        let qty = validate_positive("quantity", qty)?;
        let product = self.get_mut(id)?;

        // Compared as i64 so oversized requests still report insufficient stock.
        let available = product.quantity();
        let remaining = i64::from(available) - qty;
        if remaining < 0 {
            return Err(InventoryError::InsufficientStock {
                id: id.to_string(),
                requested: qty,
                available,
            });
        }

        let remaining = u32::try_from(remaining)
            .map_err(|_| InventoryError::invalid_data("quantity", remaining, "Out of range"))?;
        product.set_quantity(remaining);
        tracing::debug!("Sold {} of {}, {} left", qty, id, remaining);
        Ok(())
    }

    pub fn restock(&mut self, id: &str, qty: i64) -> Result<()> {
        let product = self.get_mut(id)?;
        let qty = validate_positive_count("quantity", qty)?;

        let current = product.quantity();
        let updated = current.checked_add(qty).ok_or_else(|| {
            InventoryError::invalid_data(
                "quantity",
                qty,
                format!("Restocking would exceed {} units", u32::MAX),
            )
        })?;

        product.set_quantity(updated);
        tracing::debug!("Restocked {} with {}, now {}", id, qty, updated);
        Ok(())
    }

    /// Removes and returns the product.
    pub fn remove(&mut self, id: &str) -> Result<Product> {
        let product = self
            .products
            .remove(id)
            .ok_or_else(|| InventoryError::NotFound { id: id.to_string() })?;
        self.order.retain(|existing| existing != id);
        tracing::debug!("Removed product {}", id);
        Ok(product)
    }

    pub fn search<'a>(&'a self, criterion: &SearchCriterion) -> impl Iterator<Item = &'a Product> + 'a {
        let matches = criterion.matcher();
        self.iter().filter(move |product| matches(*product))
    }

    /// Removes groceries that expired before today's local date.
    pub fn remove_expired(&mut self) -> usize {
        self.remove_expired_as_of(Local::now().date_naive())
    }

    pub fn remove_expired_as_of(&mut self, today: NaiveDate) -> usize {
        let expired: Vec<String> = self
            .iter()
            .filter(|product| product.is_expired_on(today))
            .map(|product| product.id().to_string())
            .collect();

        for id in &expired {
            self.products.remove(id);
        }
        if !expired.is_empty() {
            self.order.retain(|id| self.products.contains_key(id));
            tracing::warn!("Removed {} expired grocery item(s): {:?}", expired.len(), expired);
        }

        expired.len()
    }

    pub fn total_value(&self) -> f64 {
        self.iter().map(Product::line_value).sum()
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    /// Products in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> + '_ {
        self.order.iter().filter_map(|id| self.products.get(id))
    }

    pub fn list(&self) -> Vec<&Product> {
        self.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    fn get_mut(&mut self, id: &str) -> Result<&mut Product> {
        self.products
            .get_mut(id)
            .ok_or_else(|| InventoryError::NotFound { id: id.to_string() })
    }
}
