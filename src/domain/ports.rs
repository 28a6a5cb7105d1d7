use crate::utils::error::Result;

/// Byte-level access to the snapshot destination.
pub trait Storage {
    /// `Ok(None)` when the file does not exist yet.
    fn read_file(&self, path: &str) -> Result<Option<Vec<u8>>>;

    /// Replaces the whole file; readers never observe a partial write.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;

    /// Human-readable location of `path`, used in logs.
    fn describe(&self, path: &str) -> String {
        path.to_string()
    }
}

pub trait ConfigProvider {
    fn data_dir(&self) -> &str;
    fn file_name(&self) -> &str;
    fn expire_on_load(&self) -> bool;
}
