//! Command-line and environment configuration.

use crate::inventory::DEFAULT_LOW_STOCK_THRESHOLD;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "inventory.json";
pub const DEFAULT_MAX_INPUT_LENGTH: usize = 1000;

/// Track products, stock levels and inventory value.
#[derive(Debug, Clone, Parser)]
#[command(name = "stockroom", version, about)]
pub struct Settings {
    /// JSON file the inventory is loaded from and saved to.
    #[arg(long, env = "STOCKROOM_DATA_FILE", default_value = DEFAULT_DATA_FILE, global = true)]
    pub data_file: PathBuf,

    /// Products below this quantity are reported as low stock.
    #[arg(long, default_value_t = DEFAULT_LOW_STOCK_THRESHOLD, global = true)]
    pub low_stock_threshold: u32,

    /// Longest text accepted from the interactive shell; longer input is truncated.
    #[arg(long, default_value_t = DEFAULT_MAX_INPUT_LENGTH, global = true)]
    pub max_input_length: usize,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Interactive menu (the default).
    Shell,
    /// List every product.
    List,
    /// Show one product.
    Show { id: String },
    /// Products below the low-stock threshold.
    LowStock {
        /// Overrides --low-stock-threshold for this report.
        #[arg(long, allow_hyphen_values = true)]
        threshold: Option<i64>,
    },
    /// Total inventory value.
    Value,
    /// Counts, averages, per-category breakdown and recommendations.
    Stats,
}

impl Settings {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Shell)
    }
}
