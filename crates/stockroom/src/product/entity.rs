//! StoreEntity trait implementation for the Product domain type.
//!
//! This module contains the [`StoreEntity`] implementation that enables [`Product`]
//! to be managed by the generic [`ResourceStore`](stock_store::ResourceStore),
//! including the stock actions from [`ProductAction`].

use super::actions::{ProductAction, ProductActionResult};
use super::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use stock_store::StoreEntity;

impl StoreEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Error = ProductError;

    fn id(&self) -> &ProductId {
        Product::id(self)
    }

    /// Creates a new Product from creation parameters.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        Product::new(id, params)
    }

    /// Applies a partial update; every supplied field is re-validated.
    fn on_update(&mut self, update: ProductUpdate) -> Result<(), ProductError> {
        self.apply(update)
    }

    /// Handles stock actions.
    ///
    /// # Actions
    /// - `CheckStock`: returns the current quantity
    /// - `Restock`: adds units, fails on overflow
    /// - `Withdraw`: removes units if available
    /// - `QuoteDiscount`: returns the discounted unit price
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.quantity())),
            ProductAction::Restock(units) => {
                let level = self.quantity().checked_add(units).ok_or_else(|| {
                    ProductError::validation("quantity", format!("must be at most {}", u32::MAX))
                })?;
                self.set_quantity(level);
                Ok(ProductActionResult::Restock(level))
            }
            ProductAction::Withdraw(units) => {
                let available = self.quantity();
                if units > available {
                    return Err(ProductError::InsufficientStock {
                        requested: units,
                        available,
                    });
                }
                self.set_quantity(available - units);
                Ok(ProductActionResult::Withdraw(available - units))
            }
            ProductAction::QuoteDiscount(percent) => {
                self.discounted_price(percent).map(ProductActionResult::QuoteDiscount)
            }
        }
    }
}
