//! # Store Errors
//!
//! Common error type returned by [`ResourceStore`](crate::ResourceStore). Entity-level
//! failures are carried unboxed in [`StoreError::Entity`] so that domain wrappers can
//! map them back to their own error enums without downcasting.

/// Errors that can occur within the resource store itself.
#[derive(Debug, thiserror::Error)]
pub enum StoreError<E> {
    #[error("Item already exists: {0}")]
    Duplicate(String),
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    Entity(#[source] E),
}
