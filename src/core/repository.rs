use crate::core::inventory::Inventory;
use crate::core::snapshot;
use crate::domain::ports::Storage;
use crate::utils::error::{InventoryError, Result};

/// Whole-snapshot load/save of an [`Inventory`] through a [`Storage`].
pub struct SnapshotRepository<S: Storage> {
    storage: S,
    file_name: String,
}

impl<S: Storage> SnapshotRepository<S> {
    pub fn new(storage: S, file_name: impl Into<String>) -> Self {
        Self {
            storage,
            file_name: file_name.into(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn location(&self) -> String {
        self.storage.describe(&self.file_name)
    }

    /// A missing snapshot is a first run and yields an empty inventory.
    pub fn load(&self) -> Result<Inventory> {
        let Some(bytes) = self.storage.read_file(&self.file_name)? else {
            tracing::info!("📭 No snapshot at {}, starting empty", self.location());
            return Ok(Inventory::new());
        };

        let text = String::from_utf8(bytes).map_err(|e| {
            InventoryError::invalid_data("snapshot", self.location(), e.to_string())
        })?;
        let inventory = Inventory::from_products(snapshot::decode(&text)?)?;

        tracing::info!(
            "📦 Loaded {} product(s) from {}",
            inventory.len(),
            self.location()
        );
        Ok(inventory)
    }

    pub fn save(&self, inventory: &Inventory) -> Result<()> {
        let text = snapshot::encode(inventory.iter())?;
        self.storage.write_file(&self.file_name, text.as_bytes())?;

        tracing::info!(
            "💾 Saved {} product(s) to {}",
            inventory.len(),
            self.location()
        );
        Ok(())
    }
}
