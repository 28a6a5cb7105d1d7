//! JSON snapshot format.
//!
//! A snapshot is a JSON array of flat records. Every record carries the base
//! fields `id, name, price, quantity` and the `category` discriminator, plus
//! exactly the keys of its own category:
//!
//! | category      | extra keys                   |
//! |---------------|------------------------------|
//! | `Electronics` | `warranty_months`, `brand`   |
//! | `Grocery`     | `expiry_date` (`YYYY-MM-DD`) |
//! | `Clothing`    | `size`, `material`           |
//!
//! Decoding is all-or-nothing: the first bad record rejects the snapshot.

use crate::domain::model::{Category, Product, ProductDetails};
use crate::utils::error::{InventoryError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashSet;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Serialize)]
struct ProductRecord<'a> {
    id: &'a str,
    name: &'a str,
    price: f64,
    quantity: u32,
    category: &'static str,
    #[serde(flatten)]
    details: DetailsRecord<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum DetailsRecord<'a> {
    Electronics { warranty_months: u32, brand: &'a str },
    Grocery { expiry_date: String },
    Clothing { size: &'a str, material: &'a str },
}

impl<'a> From<&'a Product> for ProductRecord<'a> {
    fn from(product: &'a Product) -> Self {
        let details = match product.details() {
            ProductDetails::Electronics {
                warranty_months,
                brand,
            } => DetailsRecord::Electronics {
                warranty_months: *warranty_months,
                brand,
            },
            ProductDetails::Grocery { expiry_date } => DetailsRecord::Grocery {
                expiry_date: expiry_date.format(DATE_FORMAT).to_string(),
            },
            ProductDetails::Clothing { size, material } => {
                DetailsRecord::Clothing { size, material }
            }
        };

        Self {
            id: product.id(),
            name: product.name(),
            price: product.price(),
            quantity: product.quantity(),
            category: product.category().as_str(),
            details,
        }
    }
}

fn variant_keys(category: Category) -> &'static [&'static str] {
    match category {
        Category::Electronics => &["warranty_months", "brand"],
        Category::Grocery => &["expiry_date"],
        Category::Clothing => &["size", "material"],
    }
}

/// Renders products as a pretty-printed JSON array.
pub fn encode<'a, I>(products: I) -> Result<String>
where
    I: IntoIterator<Item = &'a Product>,
{
    let records: Vec<ProductRecord<'a>> = products.into_iter().map(ProductRecord::from).collect();
    serde_json::to_string_pretty(&records)
        .map_err(|e| InventoryError::invalid_data("snapshot", "<products>", e.to_string()))
}

/// Parses a snapshot back into products, in file order.
pub fn decode(text: &str) -> Result<Vec<Product>> {
    let value: Value = serde_json::from_str(text).map_err(|e| {
        InventoryError::invalid_data(
            "snapshot",
            format!("line {}, column {}", e.line(), e.column()),
            e.to_string(),
        )
    })?;

    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(InventoryError::invalid_data(
                "snapshot",
                json_type(&other),
                "Expected a JSON array of product records",
            ))
        }
    };

    let mut seen = HashSet::with_capacity(records.len());
    let mut products = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let product = decode_record(index, record)?;
        if !seen.insert(product.id().to_string()) {
            return Err(InventoryError::DuplicateId {
                id: product.id().to_string(),
            });
        }
        products.push(product);
    }

    Ok(products)
}

fn decode_record(index: usize, record: &Value) -> Result<Product> {
    let Value::Object(fields) = record else {
        return Err(InventoryError::invalid_data(
            format!("records[{}]", index),
            json_type(record),
            "Expected a JSON object",
        ));
    };
    let reader = RecordReader { index, fields };

    let category_text = reader.string("category")?;
    let category: Category = category_text.parse().map_err(|_| {
        InventoryError::invalid_data(
            reader.field_name("category"),
            &category_text,
            "Unknown product category",
        )
    })?;
    reader.reject_foreign_keys(category)?;

    let details = match category {
        Category::Electronics => {
            ProductDetails::electronics(reader.integer("warranty_months")?, reader.string("brand")?)
        }
        Category::Grocery => Ok(ProductDetails::grocery(reader.date("expiry_date")?)),
        Category::Clothing => {
            ProductDetails::clothing(reader.string("size")?, reader.string("material")?)
        }
    }
    .map_err(|e| reader.qualify(e))?;

    Product::new(
        reader.string("id")?,
        reader.string("name")?,
        reader.float("price")?,
        reader.integer("quantity")?,
        details,
    )
    .map_err(|e| reader.qualify(e))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

struct RecordReader<'a> {
    index: usize,
    fields: &'a Map<String, Value>,
}

impl RecordReader<'_> {
    fn field_name(&self, key: &str) -> String {
        format!("records[{}].{}", self.index, key)
    }

    /// Prefixes model validation errors with the record position.
    fn qualify(&self, error: InventoryError) -> InventoryError {
        match error {
            InventoryError::InvalidData {
                field,
                value,
                reason,
            } => InventoryError::InvalidData {
                field: self.field_name(&field),
                value,
                reason,
            },
            other => other,
        }
    }

    fn required(&self, key: &str) -> Result<&Value> {
        match self.fields.get(key) {
            Some(Value::Null) | None => Err(InventoryError::invalid_data(
                self.field_name(key),
                "<missing>",
                "Required field is missing",
            )),
            Some(value) => Ok(value),
        }
    }

    fn wrong_type(&self, key: &str, value: &Value, expected: &str) -> InventoryError {
        InventoryError::invalid_data(
            self.field_name(key),
            value,
            format!("Expected {}, found {}", expected, json_type(value)),
        )
    }

    fn string(&self, key: &str) -> Result<String> {
        let value = self.required(key)?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| self.wrong_type(key, value, "a string"))
    }

    fn integer(&self, key: &str) -> Result<i64> {
        let value = self.required(key)?;
        value
            .as_i64()
            .ok_or_else(|| self.wrong_type(key, value, "an integer"))
    }

    fn float(&self, key: &str) -> Result<f64> {
        let value = self.required(key)?;
        value
            .as_f64()
            .ok_or_else(|| self.wrong_type(key, value, "a number"))
    }

    fn date(&self, key: &str) -> Result<NaiveDate> {
        let text = self.string(key)?;
        NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(|e| {
            InventoryError::invalid_data(
                self.field_name(key),
                &text,
                format!("Expected an ISO-8601 date (YYYY-MM-DD): {}", e),
            )
        })
    }

    fn reject_foreign_keys(&self, category: Category) -> Result<()> {
        let foreign = Category::ALL
            .into_iter()
            .filter(|other| *other != category)
            .flat_map(variant_keys)
            .find(|key| self.fields.contains_key(**key));

        match foreign {
            Some(key) => Err(InventoryError::invalid_data(
                self.field_name(key),
                &self.fields[*key],
                format!("Field does not belong to a {} product", category),
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_products() -> Vec<Product> {
        vec![
            Product::electronics("E1", "Phone", 500.0, 2, 12, "Acme").unwrap(),
            Product::grocery("G1", "Milk", 1.5, 4, date(2026, 10, 16)).unwrap(),
            Product::clothing("C1", "Shirt", 19.99, 7, "M", "Cotton").unwrap(),
        ]
    }

    fn invalid_field(result: Result<Vec<Product>>) -> String {
        match result {
            Err(InventoryError::InvalidData { field, .. }) => field,
            other => panic!("expected InvalidData, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_tags_category_and_iso_dates() {
        let products = sample_products();
        let text = encode(&products).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(
            value[1],
            json!({
                "id": "G1",
                "name": "Milk",
                "price": 1.5,
                "quantity": 4,
                "category": "Grocery",
                "expiry_date": "2026-10-16"
            })
        );
        assert_eq!(value[0]["category"], "Electronics");
        assert_eq!(value[0]["warranty_months"], 12);
        assert!(value[0].get("size").is_none());
        assert_eq!(value[2]["material"], "Cotton");
    }

    #[test]
    fn test_decode_restores_variant_fields() {
        let products = sample_products();
        let decoded = decode(&encode(&products).unwrap()).unwrap();
        assert_eq!(decoded, products);
    }

    #[test]
    fn test_full_precision_prices_survive_decode() {
        let prices = [
            985.6906946328695,
            212.91890726713459,
            479.60756426982596,
            92.42132512813595,
            0.1 + 0.2,
        ];
        let products: Vec<Product> = prices
            .iter()
            .enumerate()
            .map(|(i, price)| {
                Product::clothing(format!("C{}", i), "Scarf", *price, 1, "M", "Silk").unwrap()
            })
            .collect();

        let decoded = decode(&encode(&products).unwrap()).unwrap();
        for (product, price) in decoded.iter().zip(prices) {
            assert_eq!(product.price().to_bits(), price.to_bits());
        }
    }

    #[test]
    fn test_decode_empty_array() {
        assert!(decode("[]").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let text = json!([{
            "id": "B1", "name": "Novel", "price": 9.0, "quantity": 1, "category": "Books"
        }])
        .to_string();
        assert_eq!(invalid_field(decode(&text)), "records[0].category");
    }

    #[test]
    fn test_missing_variant_field_rejected() {
        let text = json!([
            {"id": "C1", "name": "Shirt", "price": 1.0, "quantity": 1,
             "category": "Clothing", "size": "M", "material": "Cotton"},
            {"id": "E1", "name": "Phone", "price": 1.0, "quantity": 1,
             "category": "Electronics", "warranty_months": 12}
        ])
        .to_string();
        assert_eq!(invalid_field(decode(&text)), "records[1].brand");
    }

    #[test]
    fn test_foreign_variant_field_rejected() {
        let text = json!([{
            "id": "G1", "name": "Milk", "price": 1.0, "quantity": 1,
            "category": "Grocery", "expiry_date": "2026-10-16", "brand": "Acme"
        }])
        .to_string();
        assert_eq!(invalid_field(decode(&text)), "records[0].brand");
    }

    #[test]
    fn test_bad_values_rejected() {
        let negative = json!([{
            "id": "C1", "name": "Shirt", "price": 1.0, "quantity": -2,
            "category": "Clothing", "size": "M", "material": "Cotton"
        }])
        .to_string();
        assert_eq!(invalid_field(decode(&negative)), "records[0].quantity");

        let bad_date = json!([{
            "id": "G1", "name": "Milk", "price": 1.0, "quantity": 1,
            "category": "Grocery", "expiry_date": "16/10/2026"
        }])
        .to_string();
        assert_eq!(invalid_field(decode(&bad_date)), "records[0].expiry_date");

        let wrong_type = json!([{
            "id": "G1", "name": "Milk", "price": "cheap", "quantity": 1,
            "category": "Grocery", "expiry_date": "2026-10-16"
        }])
        .to_string();
        assert_eq!(invalid_field(decode(&wrong_type)), "records[0].price");
    }

    #[test]
    fn test_malformed_documents_rejected() {
        assert_eq!(invalid_field(decode("{not json")), "snapshot");
        assert_eq!(invalid_field(decode("{\"id\": \"E1\"}")), "snapshot");
        assert_eq!(invalid_field(decode("[1]")), "records[0]");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let text = json!([
            {"id": "C1", "name": "Shirt", "price": 1.0, "quantity": 1,
             "category": "Clothing", "size": "M", "material": "Cotton"},
            {"id": "C1", "name": "Scarf", "price": 1.0, "quantity": 1,
             "category": "Clothing", "size": "L", "material": "Silk"}
        ])
        .to_string();
        assert!(matches!(
            decode(&text),
            Err(InventoryError::DuplicateId { ref id }) if id == "C1"
        ));
    }
}
