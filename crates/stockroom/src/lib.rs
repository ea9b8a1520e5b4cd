//! # Stockroom
//!
//! A small inventory manager: products with stock levels and prices, kept in a JSON
//! file and driven from an interactive text menu or one-shot subcommands.
//!
//! ## Core Components
//!
//! - **[model]**: The [`Product`](model::Product) entity and its create/update payloads.
//! - **[product]**: Field validation, stock actions and [`ProductError`](product::ProductError).
//! - **[inventory]**: The [`Inventory`](inventory::Inventory) collection, search and reports.
//! - **[storage]**: Atomic JSON persistence through [`JsonStore`](storage::JsonStore).
//! - **[settings]**: Command-line and environment configuration.
//! - **[shell]**: The interactive menu and text rendering.
//!
//! Products live in a [`ResourceStore`](stock_store::ResourceStore); the inventory is
//! its [`StoreClient`], re-exported here so callers get `get` and `remove` in scope.

pub mod inventory;
pub mod model;
pub mod product;
pub mod settings;
pub mod shell;
pub mod storage;

pub use stock_store::StoreClient;
