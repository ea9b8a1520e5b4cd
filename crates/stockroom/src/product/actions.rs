//! Custom actions for the Product entity.
//!
//! This module defines the stock operations that go beyond plain CRUD: checking a
//! level, receiving and withdrawing units, and quoting a discounted price. They are
//! handled by [`StoreEntity::handle_action`](stock_store::StoreEntity::handle_action).

/// Custom actions for Product entities.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Adds received units to the stock.
    ///
    /// # Errors
    /// Fails if the new level would not fit in a `u32`.
    Restock(u32),
    /// Takes units out of stock.
    ///
    /// # Errors
    /// Fails if the requested amount exceeds available stock.
    Withdraw(u32),
    /// Computes the unit price after a percentage discount. Read-only.
    QuoteDiscount(f64),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Current stock level
    CheckStock(u32),
    /// Stock level after the restock
    Restock(u32),
    /// Stock level after the withdrawal
    Withdraw(u32),
    /// Discounted unit price
    QuoteDiscount(f64),
}
