use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::{validate_count, validate_non_empty_string, validate_price};
use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Product category, also used as the persisted discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Grocery,
    Clothing,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Electronics, Category::Grocery, Category::Clothing];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Grocery => "Grocery",
            Category::Clothing => "Clothing",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                InventoryError::invalid_data(
                    "category",
                    s,
                    "Expected one of Electronics, Grocery, Clothing",
                )
            })
    }
}

/// Category-specific attributes. Exactly one set per product.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductDetails {
    Electronics { warranty_months: u32, brand: String },
    Grocery { expiry_date: NaiveDate },
    Clothing { size: String, material: String },
}

impl ProductDetails {
    pub fn electronics(warranty_months: i64, brand: impl Into<String>) -> Result<Self> {
        let brand = brand.into();
        validate_non_empty_string("brand", &brand)?;
        Ok(Self::Electronics {
            warranty_months: validate_count("warranty_months", warranty_months)?,
            brand,
        })
    }

    pub fn grocery(expiry_date: NaiveDate) -> Self {
        Self::Grocery { expiry_date }
    }

    pub fn clothing(size: impl Into<String>, material: impl Into<String>) -> Result<Self> {
        let size = size.into();
        let material = material.into();
        validate_non_empty_string("size", &size)?;
        validate_non_empty_string("material", &material)?;
        Ok(Self::Clothing { size, material })
    }

    pub fn category(&self) -> Category {
        match self {
            ProductDetails::Electronics { .. } => Category::Electronics,
            ProductDetails::Grocery { .. } => Category::Grocery,
            ProductDetails::Clothing { .. } => Category::Clothing,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: String,
    name: String,
    price: f64,
    quantity: u32,
    details: ProductDetails,
}

impl Product {
    /// Validates the base fields; `details` are validated by their own constructors.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        details: ProductDetails,
    ) -> Result<Self> {
        let id = id.into();
        let name = name.into();
        validate_non_empty_string("id", &id)?;
        validate_non_empty_string("name", &name)?;

        Ok(Self {
            id,
            name,
            price: validate_price("price", price)?,
            quantity: validate_count("quantity", quantity)?,
            details,
        })
    }

    pub fn electronics(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        warranty_months: i64,
        brand: impl Into<String>,
    ) -> Result<Self> {
        let details = ProductDetails::electronics(warranty_months, brand)?;
        Self::new(id, name, price, quantity, details)
    }

    pub fn grocery(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        expiry_date: NaiveDate,
    ) -> Result<Self> {
        Self::new(id, name, price, quantity, ProductDetails::grocery(expiry_date))
    }

    pub fn clothing(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        quantity: i64,
        size: impl Into<String>,
        material: impl Into<String>,
    ) -> Result<Self> {
        let details = ProductDetails::clothing(size, material)?;
        Self::new(id, name, price, quantity, details)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn category(&self) -> Category {
        self.details.category()
    }

    pub fn details(&self) -> &ProductDetails {
        &self.details
    }

    /// Price × quantity for this line.
    pub fn line_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn warranty_months(&self) -> Option<u32> {
        match &self.details {
            ProductDetails::Electronics {
                warranty_months, ..
            } => Some(*warranty_months),
            _ => None,
        }
    }

    pub fn brand(&self) -> Option<&str> {
        match &self.details {
            ProductDetails::Electronics { brand, .. } => Some(brand),
            _ => None,
        }
    }

    pub fn expiry_date(&self) -> Option<NaiveDate> {
        match &self.details {
            ProductDetails::Grocery { expiry_date } => Some(*expiry_date),
            _ => None,
        }
    }

    pub fn size(&self) -> Option<&str> {
        match &self.details {
            ProductDetails::Clothing { size, .. } => Some(size),
            _ => None,
        }
    }

    pub fn material(&self) -> Option<&str> {
        match &self.details {
            ProductDetails::Clothing { material, .. } => Some(material),
            _ => None,
        }
    }

    /// Only groceries expire, and only once `today` is past the expiry date.
    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.expiry_date().is_some_and(|expiry| expiry < today)
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({}) - ", self.category(), self.name, self.id)?;
        match &self.details {
            ProductDetails::Electronics {
                warranty_months,
                brand,
            } => write!(f, "Brand: {}, Warranty: {} months", brand, warranty_months)?,
            ProductDetails::Grocery { expiry_date } => write!(f, "Expires: {}", expiry_date)?,
            ProductDetails::Clothing { size, material } => {
                write!(f, "Size: {}, Material: {}", size, material)?
            }
        }
        write!(f, ", Stock: {}, Price: {}", self.quantity, self.price)
    }
}
