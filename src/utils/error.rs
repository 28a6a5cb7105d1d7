use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Product ID already exists: {id}")]
    DuplicateId { id: String },

    #[error("Product not found: {id}")]
    NotFound { id: String },

    #[error("Insufficient stock for {id}: requested {requested}, available {available}")]
    InsufficientStock {
        id: String,
        requested: i64,
        available: u32,
    },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidData {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Storage IO error at {path}: {source}")]
    StorageIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Inventory,
    Data,
    Storage,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl InventoryError {
    pub fn invalid_data(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidData {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn storage_io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::StorageIo {
            path: path.into(),
            source,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateId { .. } | Self::NotFound { .. } | Self::InsufficientStock { .. } => {
                ErrorCategory::Inventory
            }
            Self::InvalidData { .. } => ErrorCategory::Data,
            Self::StorageIo { .. } => ErrorCategory::Storage,
            Self::Config { .. } => ErrorCategory::Configuration,
        }
    }

    /// 決定 CLI 的退出碼等級
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound { .. } | Self::InsufficientStock { .. } => ErrorSeverity::Medium,
            Self::DuplicateId { .. } | Self::InvalidData { .. } => ErrorSeverity::High,
            Self::StorageIo { .. } | Self::Config { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::DuplicateId { id } => {
                format!("Choose a different product ID, or restock '{}' instead", id)
            }
            Self::NotFound { .. } => "Run `list` to see the IDs currently in stock".to_string(),
            Self::InsufficientStock { available, .. } => {
                format!("Sell at most {} units, or restock first", available)
            }
            Self::InvalidData { field, .. } => {
                format!("Check the value given for '{}'", field)
            }
            Self::StorageIo { path, .. } => {
                format!("Make sure '{}' is readable and its directory is writable", path)
            }
            Self::Config { .. } => "Check the configuration file syntax and values".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::DuplicateId { id } => format!("A product with ID '{}' already exists", id),
            Self::NotFound { id } => format!("No product with ID '{}'", id),
            Self::InsufficientStock {
                id,
                requested,
                available,
            } => format!(
                "Cannot sell {} of '{}': only {} in stock",
                requested, id, available
            ),
            Self::InvalidData {
                field,
                value,
                reason,
            } => format!("Invalid {} '{}': {}", field, value, reason),
            Self::StorageIo { path, source } => {
                format!("Could not access inventory file '{}': {}", path, source)
            }
            Self::Config { message } => format!("Configuration problem: {}", message),
        }
    }
}

pub type Result<T> = std::result::Result<T, InventoryError>;
