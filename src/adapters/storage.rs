use crate::domain::ports::Storage;
use crate::utils::error::{InventoryError, Result};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Filesystem storage rooted at `base_path`.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        Path::new(&self.base_path).join(path)
    }
}

impl Storage for LocalStorage {
    fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>> {
        let full_path = self.full_path(path);
        match fs::read(&full_path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(InventoryError::storage_io(full_path.display().to_string(), e)),
        }
    }

    /// Writes to a temp file next to the destination, then renames it over.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.full_path(path);
        let io_error = |e| InventoryError::storage_io(full_path.display().to_string(), e);

        let parent = match full_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent).map_err(io_error)?;

        let mut temp = NamedTempFile::new_in(&parent).map_err(io_error)?;
        temp.write_all(data).map_err(io_error)?;
        temp.as_file().sync_all().map_err(io_error)?;
        temp.persist(&full_path).map_err(|e| io_error(e.error))?;

        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }

    fn describe(&self, path: &str) -> String {
        self.full_path(path).display().to_string()
    }
}
