//! # StoreEntity Trait
//!
//! The `StoreEntity` trait is the contract every resource kept in a
//! [`ResourceStore`](crate::ResourceStore) implements. Associated types fix the ID,
//! the creation and update DTOs, the custom actions and the error type, so a store of
//! products can only ever receive product payloads.
//!
//! # Provided Methods (Hooks)
//! - [`StoreEntity::on_create`]
//! - [`StoreEntity::on_delete`]
//!
//! Both default to `Ok(())`.

use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by [`ResourceStore`](crate::ResourceStore).
///
/// Hooks that mutate (`on_update`, `handle_action`) are always invoked on a scratch
/// copy of the entity. The store only commits the copy when the hook returns `Ok`, so
/// an implementation may bail out half way through without leaving partial state behind.
pub trait StoreEntity: Clone + Debug {
    /// The unique identifier for this entity.
    type Id: Ord + Clone + Display + Debug;

    /// The data required to create a new instance.
    type Create: Debug;

    /// The data required to update an existing instance.
    type Update: Debug;

    /// Enum of resource-specific operations (e.g. `Withdraw`).
    type Action: Debug;

    /// The result type returned by custom actions.
    type ActionResult: Debug;

    /// The error type for this entity.
    type Error: std::error::Error + 'static;

    /// The identifier this entity is stored under.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the ID and payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and before insertion.
    fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update request.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom resource-specific action.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}
