use crate::config::cli::Command;
use crate::core::inventory::Inventory;
use crate::domain::model::Product;
use crate::utils::error::Result;
use std::fmt;

/// Result of one command: whether the inventory needs saving, and the text to show.
///
/// Output is buffered so the caller can persist before rendering; a broken
/// stdout must not lose a completed mutation.
#[derive(Debug, Default)]
pub struct Outcome {
    pub mutated: bool,
    pub output: String,
}

impl Outcome {
    fn line(&mut self, args: fmt::Arguments<'_>) {
        self.output.push_str(&args.to_string());
        self.output.push('\n');
    }
}

/// Runs one command against the inventory.
pub fn execute(command: Command, inventory: &mut Inventory) -> Result<Outcome> {
    let mut outcome = Outcome::default();
    outcome.mutated = match command {
        Command::Add { product } => {
            let product = product.into_product()?;
            let id = product.id().to_string();
            inventory.add(product)?;
            outcome.line(format_args!("✅ Product {} added", id));
            true
        }
        Command::Sell { id, quantity } => {
            inventory.sell(&id, quantity)?;
            let left = inventory.get(&id).map(Product::quantity).unwrap_or_default();
            outcome.line(format_args!("✅ Sold {} of {} ({} left)", quantity, id, left));
            true
        }
        Command::Restock { id, quantity } => {
            inventory.restock(&id, quantity)?;
            let now = inventory.get(&id).map(Product::quantity).unwrap_or_default();
            outcome.line(format_args!("✅ Restocked {} ({} in stock)", id, now));
            true
        }
        Command::Remove { id } => {
            let removed = inventory.remove(&id)?;
            outcome.line(format_args!("🗑️ Removed {}", removed));
            true
        }
        Command::Search(args) => {
            let criterion = args.criterion()?;
            let mut found = 0;
            for product in inventory.search(&criterion) {
                outcome.line(format_args!("{}", product));
                found += 1;
            }
            if found == 0 {
                outcome.line(format_args!("No matching products"));
            }
            false
        }
        Command::List => {
            if inventory.is_empty() {
                outcome.line(format_args!("Inventory is empty"));
            }
            for product in inventory.iter() {
                outcome.line(format_args!("{}", product));
            }
            false
        }
        Command::RemoveExpired => {
            let removed = inventory.remove_expired();
            outcome.line(format_args!("🧹 Removed {} expired product(s)", removed));
            removed > 0
        }
        Command::Value => {
            outcome.line(format_args!(
                "Total inventory value: {:.2}",
                inventory.total_value()
            ));
            false
        }
    };

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::utils::error::InventoryError;
    use chrono::{Days, Local};
    use clap::Parser;

    fn run(args: &[&str], inventory: &mut Inventory) -> (Result<bool>, String) {
        let mut argv = vec!["small-inventory"];
        argv.extend_from_slice(args);
        let cli = CliConfig::try_parse_from(argv).unwrap();

        match execute(cli.command, inventory) {
            Ok(outcome) => (Ok(outcome.mutated), outcome.output),
            Err(e) => (Err(e), String::new()),
        }
    }

    fn stocked() -> Inventory {
        let mut inventory = Inventory::new();
        inventory
            .add(Product::electronics("E1", "Phone", 500.0, 2, 12, "Acme").unwrap())
            .unwrap();
        inventory
    }

    #[test]
    fn test_add_then_list() {
        let mut inventory = Inventory::new();
        let (result, output) = run(
            &[
                "add", "clothing", "--id", "C1", "--name", "Shirt", "--price", "20",
                "--quantity", "3", "--size", "M", "--material", "Cotton",
            ],
            &mut inventory,
        );
        assert!(result.unwrap());
        assert!(output.contains("C1 added"));

        let (result, output) = run(&["list"], &mut inventory);
        assert!(!result.unwrap());
        assert!(output.contains("[Clothing] Shirt (C1) - Size: M, Material: Cotton"));
    }

    #[test]
    fn test_mutation_is_reported_independently_of_rendering() {
        let mut inventory = stocked();
        let cli = CliConfig::try_parse_from(["small-inventory", "sell", "E1", "1"]).unwrap();

        let outcome = execute(cli.command, &mut inventory).unwrap();

        // Nothing has been written anywhere yet; the caller decides when to render.
        assert!(outcome.mutated);
        assert_eq!(outcome.output, "✅ Sold 1 of E1 (1 left)\n");
        assert_eq!(inventory.get("E1").unwrap().quantity(), 1);
    }

    #[test]
    fn test_sell_failure_is_reported_not_rendered() {
        let mut inventory = stocked();
        let (result, output) = run(&["sell", "E1", "3"], &mut inventory);

        assert!(matches!(result, Err(InventoryError::InsufficientStock { .. })));
        assert!(output.is_empty());
    }

    #[test]
    fn test_value_and_search_are_read_only() {
        let mut inventory = stocked();

        let (result, output) = run(&["value"], &mut inventory);
        assert!(!result.unwrap());
        assert_eq!(output.trim(), "Total inventory value: 1000.00");

        let (result, output) = run(&["search", "--name", "PHO"], &mut inventory);
        assert!(!result.unwrap());
        assert!(output.contains("(E1)"));
    }

    #[test]
    fn test_remove_expired_reports_count() {
        let mut inventory = stocked();
        let yesterday = Local::now()
            .date_naive()
            .checked_sub_days(Days::new(1))
            .unwrap();
        inventory
            .add(Product::grocery("G1", "Milk", 1.0, 1, yesterday).unwrap())
            .unwrap();

        let (result, output) = run(&["remove-expired"], &mut inventory);
        assert!(result.unwrap());
        assert!(output.contains("Removed 1 expired"));

        let (result, _) = run(&["remove-expired"], &mut inventory);
        assert!(!result.unwrap());
    }
}
