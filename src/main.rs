use clap::Parser;
use std::io::Write;
use small_inventory::app::commands;
use small_inventory::utils::error::{ErrorSeverity, InventoryError};
use small_inventory::utils::{logger, validation::Validate};
use small_inventory::{CliConfig, ConfigProvider, LocalStorage, SnapshotRepository, TomlConfig};

fn main() {
    let cli = CliConfig::parse();

    // 載入並驗證配置 (日誌尚未初始化，直接輸出到 stderr)
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(cli, &config) {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }
}

fn run(cli: CliConfig, config: &TomlConfig) -> small_inventory::Result<()> {
    let storage = LocalStorage::new(config.data_dir().to_string());
    let repository = SnapshotRepository::new(storage, config.file_name());

    let mut inventory = repository.load()?;
    let mut mutated = false;
    if config.expire_on_load() {
        mutated = inventory.remove_expired() > 0;
    }

    let outcome = commands::execute(cli.command, &mut inventory)?;
    mutated |= outcome.mutated;

    // 先寫回快照再輸出，輸出失敗不會遺失已完成的變更
    if mutated {
        repository.save(&inventory)?;
    }

    std::io::stdout()
        .write_all(outcome.output.as_bytes())
        .map_err(|e| InventoryError::storage_io("<stdout>", e))
}

fn exit_code(error: &InventoryError) -> i32 {
    match error.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
