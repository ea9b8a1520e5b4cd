//! # Stock Store
//!
//! Building blocks for keeping typed, validated records in memory behind a uniform
//! CRUD + Action API.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`StoreEntity`]) - your business rules: how a record is built
//!    from a creation DTO, how it accepts updates, which custom actions it supports.
//! 2. **Store Layer** ([`ResourceStore`]) - the keyed collection that runs requests
//!    against entities, commits only successful changes and logs every operation.
//! 3. **Interface Layer** ([`StoreClient`]) - domain wrappers that own a store and map
//!    [`StoreError`] into their own error type.
//!
//! Business logic is written once in the entity; the store handles lookup, duplicate
//! and missing-ID checks, rollback of failed updates, and logging.
//!
//! ## Concurrency Model
//!
//! There is none. A store is owned by exactly one caller and every request runs to
//! completion before the next one starts.

pub mod client;
pub mod entity;
pub mod error;
pub mod store;
pub mod tracing;

pub use client::StoreClient;
pub use entity::StoreEntity;
pub use error::StoreError;
pub use store::ResourceStore;
