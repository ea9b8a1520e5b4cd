//! # Product
//!
//! Product-specific resource logic: field validation, the
//! [`StoreEntity`](stock_store::StoreEntity) implementation for
//! [`Product`](crate::model::Product), and the stock actions.
//!
//! ## Structure
//!
//! - [`entity`] - `StoreEntity` implementation for `Product`
//! - [`error`] - [`ProductError`] type for type-safe error handling
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`] for stock management
//! - [`validate`] - field rules shared by creation, updates and loading

pub mod actions;
pub mod entity;
pub mod error;
pub mod validate;

pub use actions::*;
pub use error::*;
