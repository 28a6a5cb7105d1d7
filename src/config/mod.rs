#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-inventory")]
#[command(about = "A small local inventory tracker")]
pub struct CliConfig {
    #[arg(short, long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Directory holding the inventory snapshot")]
    pub data_dir: Option<String>,

    #[arg(long, help = "Snapshot file name inside the data directory")]
    pub file: Option<String>,

    #[arg(long, help = "Remove expired groceries right after loading")]
    pub expire_on_load: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: cli::Command,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔並套用命令列覆蓋設定
    pub fn resolve(&self) -> crate::Result<toml_config::TomlConfig> {
        let mut config = match &self.config {
            Some(path) => toml_config::TomlConfig::from_file(path)?,
            None => toml_config::TomlConfig::default(),
        };

        if let Some(data_dir) = &self.data_dir {
            config.storage.data_dir = data_dir.clone();
        }
        if let Some(file) = &self.file {
            config.storage.file_name = file.clone();
        }
        if self.expire_on_load {
            config.inventory.expire_on_load = true;
        }

        Ok(config)
    }
}
