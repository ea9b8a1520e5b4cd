//! # Storage
//!
//! JSON persistence for the [`Inventory`](crate::inventory::Inventory).
//!
//! The file holds `{"products": [...]}` with one object per product
//! (`id`, `name`, `category`, `quantity`, `price`, `updated_at`). A bare array of
//! product objects is accepted on load as well.

pub mod error;
pub mod json_store;

pub use error::*;
pub use json_store::*;
