//! Error types for product and inventory operations.

use crate::model::ProductId;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// A field value broke one of the product rules.
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    /// A product with this ID is already in the inventory.
    #[error("Product already exists: {0}")]
    DuplicateId(ProductId),

    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    /// The requested quantity exceeds the available stock.
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
}

impl ProductError {
    pub(crate) fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        ProductError::Validation {
            field,
            reason: reason.into(),
        }
    }
}
