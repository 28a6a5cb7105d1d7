use crate::utils::error::{InventoryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(InventoryError::invalid_data(
            field_name,
            path,
            "Path cannot be empty",
        ));
    }

    if path.contains('\0') {
        return Err(InventoryError::invalid_data(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_extensions.contains(&extension) => Ok(()),
        Some(extension) => Err(InventoryError::invalid_data(
            field_name,
            file,
            format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        )),
        None => Err(InventoryError::invalid_data(
            field_name,
            file,
            "File has no extension or invalid extension",
        )),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InventoryError::invalid_data(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_price(field_name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(InventoryError::invalid_data(
            field_name,
            value,
            "Value must be a finite number",
        ));
    }
    if value < 0.0 {
        return Err(InventoryError::invalid_data(
            field_name,
            value,
            "Value cannot be negative",
        ));
    }
    Ok(value)
}

/// Accepts `0..=u32::MAX`.
pub fn validate_count(field_name: &str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(InventoryError::invalid_data(
            field_name,
            value,
            "Value cannot be negative",
        ));
    }
    u32::try_from(value).map_err(|_| {
        InventoryError::invalid_data(
            field_name,
            value,
            format!("Value must be at most {}", u32::MAX),
        )
    })
}

pub fn validate_positive(field_name: &str, value: i64) -> Result<i64> {
    if value <= 0 {
        return Err(InventoryError::invalid_data(
            field_name,
            value,
            "Value must be a positive integer",
        ));
    }
    Ok(value)
}

/// Accepts `1..=u32::MAX`.
pub fn validate_positive_count(field_name: &str, value: i64) -> Result<u32> {
    validate_count(field_name, validate_positive(field_name, value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data_dir", "./data").is_ok());
        assert!(validate_path("data_dir", "").is_err());
        assert!(validate_path("data_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        assert!(validate_file_extension("file_name", "inventory.json", &["json"]).is_ok());
        assert!(validate_file_extension("file_name", "inventory.csv", &["json"]).is_err());
        assert!(validate_file_extension("file_name", "inventory", &["json"]).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(validate_price("price", 0.0).unwrap(), 0.0);
        assert!(validate_price("price", -0.01).is_err());
        assert!(validate_price("price", f64::NAN).is_err());
        assert!(validate_price("price", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_counts() {
        assert_eq!(validate_count("quantity", 0).unwrap(), 0);
        assert!(validate_count("quantity", -1).is_err());
        assert!(validate_count("quantity", i64::from(u32::MAX) + 1).is_err());

        assert!(validate_positive("qty", -4).is_err());
        assert_eq!(validate_positive("qty", 5_000_000_000).unwrap(), 5_000_000_000);
        assert!(validate_positive_count("qty", 0).is_err());
        assert_eq!(validate_positive_count("qty", 5).unwrap(), 5);
    }

    #[test]
    fn test_invalid_data_names_field() {
        match validate_non_empty_string("brand", "  ") {
            Err(InventoryError::InvalidData { field, .. }) => assert_eq!(field, "brand"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
