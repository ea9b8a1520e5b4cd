//! Text rendering shared by the interactive menu and the one-shot subcommands.

use crate::inventory::Inventory;
use crate::model::{Product, ProductId};
use crate::settings::Command;
use std::io::{self, Write};
use stock_store::StoreClient;

pub fn products<'a, W: Write>(
    out: &mut W,
    products: impl IntoIterator<Item = &'a Product>,
    empty_message: &str,
) -> io::Result<()> {
    let products: Vec<&Product> = products.into_iter().collect();
    if products.is_empty() {
        return writeln!(out, "{empty_message}");
    }
    writeln!(out, "Products found: {}", products.len())?;
    writeln!(out, "{}", "-".repeat(80))?;
    for product in products {
        writeln!(out, "{product}")?;
    }
    Ok(())
}

/// Runs a non-interactive subcommand against a loaded inventory.
pub fn run_command<W: Write>(command: &Command, inventory: &Inventory, out: &mut W) -> io::Result<()> {
    match command {
        Command::Shell => Ok(()),
        Command::List => products(out, inventory.products(), "No products in the inventory."),
        Command::Show { id } => match inventory.get(&ProductId::from(id.as_str())) {
            Some(product) => writeln!(out, "{product}"),
            None => writeln!(out, "Product not found: {id}"),
        },
        Command::LowStock { threshold } => {
            let threshold = threshold.or(Some(i64::from(inventory.low_stock_threshold())));
            write!(out, "{}", inventory.low_stock_report(threshold))
        }
        Command::Value => write!(out, "{}", inventory.valuation()),
        Command::Stats => statistics(out, inventory),
    }
}

pub fn statistics<W: Write>(out: &mut W, inventory: &Inventory) -> io::Result<()> {
    if inventory.is_empty() {
        return writeln!(out, "No products in the inventory.");
    }
    write!(out, "{}", inventory.statistics())
}
