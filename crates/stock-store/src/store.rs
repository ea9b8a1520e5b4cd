//! # Generic Resource Store
//!
//! This module defines the `ResourceStore`, the component that owns a keyed collection
//! of entities and runs every CRUD + Action request against them. Requests are handled
//! synchronously by the caller that owns the store, so the store never needs a lock.

use crate::entity::StoreEntity;
use crate::error::StoreError;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// The generic store that manages a collection of entities.
///
/// The store keeps entities in a `BTreeMap` keyed by `T::Id`, which makes iteration
/// order follow the ID ordering and keeps listings deterministic.
///
/// # Operations
///
/// * **Insert / Create**: rejects a second entity with an existing ID
///   ([`StoreError::Duplicate`]). `create` builds the entity via
///   [`StoreEntity::from_create_params`] and runs [`StoreEntity::on_create`] first.
/// * **Get**: borrows the entity if found.
/// * **Update**: runs [`StoreEntity::on_update`] on a copy and commits it on success.
/// * **Remove**: runs [`StoreEntity::on_delete`] and hands the removed entity back.
/// * **Action**: runs [`StoreEntity::handle_action`] on a copy and commits it on success.
///
/// ```rust
/// use stock_store::{ResourceStore, StoreEntity};
///
/// #[derive(Clone, Debug)]
/// struct Bin { id: u32, label: String }
/// #[derive(Debug)] struct BinCreate { label: String }
/// #[derive(Debug)] struct BinUpdate { label: Option<String> }
/// #[derive(Debug)] enum BinAction {}
/// #[derive(Debug, thiserror::Error)] #[error("bin error")] struct BinError;
///
/// impl StoreEntity for Bin {
///     type Id = u32; type Create = BinCreate; type Update = BinUpdate;
///     type Action = BinAction; type ActionResult = (); type Error = BinError;
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, params: BinCreate) -> Result<Self, BinError> {
///         Ok(Self { id, label: params.label })
///     }
///     fn on_update(&mut self, update: BinUpdate) -> Result<(), BinError> {
///         if let Some(label) = update.label { self.label = label; }
///         Ok(())
///     }
///     fn handle_action(&mut self, action: BinAction) -> Result<(), BinError> { match action {} }
/// }
///
/// let mut store = ResourceStore::<Bin>::new();
/// store.create(7, BinCreate { label: "A-7".into() }).unwrap();
/// assert_eq!(store.get(&7).unwrap().label, "A-7");
/// assert!(store.create(7, BinCreate { label: "again".into() }).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ResourceStore<T: StoreEntity> {
    store: BTreeMap<T::Id, T>,
}

impl<T: StoreEntity> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StoreEntity> ResourceStore<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            store: BTreeMap::new(),
        }
    }

    /// Short type name used as the `entity_type` field of every log line.
    fn entity_type() -> &'static str {
        std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown")
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.store.contains_key(id)
    }

    /// Iterates over all entities in ID order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.store.values()
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        let entity_type = Self::entity_type();
        let item = self.store.get(id);
        debug!(entity_type, %id, found = item.is_some(), "Get");
        item
    }

    /// Inserts an already constructed entity under its own ID.
    pub fn insert(&mut self, mut item: T) -> Result<T::Id, StoreError<T::Error>> {
        let entity_type = Self::entity_type();
        let id = item.id().clone();
        debug!(entity_type, %id, "Insert");
        if self.store.contains_key(&id) {
            warn!(entity_type, %id, "Duplicate");
            return Err(StoreError::Duplicate(id.to_string()));
        }
        if let Err(e) = item.on_create() {
            warn!(entity_type, %id, error = %e, "on_create failed");
            return Err(StoreError::Entity(e));
        }
        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    /// Builds an entity from creation parameters and inserts it.
    pub fn create(&mut self, id: T::Id, params: T::Create) -> Result<T::Id, StoreError<T::Error>> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, ?params, "Create");
        if self.store.contains_key(&id) {
            warn!(entity_type, %id, "Duplicate");
            return Err(StoreError::Duplicate(id.to_string()));
        }
        match T::from_create_params(id, params) {
            Ok(item) => self.insert(item),
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                Err(StoreError::Entity(e))
            }
        }
    }

    /// Applies an update and returns the committed entity.
    pub fn update(&mut self, id: &T::Id, update: T::Update) -> Result<&T, StoreError<T::Error>> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, ?update, "Update");
        let Some(slot) = self.store.get_mut(id) else {
            warn!(entity_type, %id, "Not found");
            return Err(StoreError::NotFound(id.to_string()));
        };
        let mut draft = slot.clone();
        if let Err(e) = draft.on_update(update) {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(StoreError::Entity(e));
        }
        *slot = draft;
        info!(entity_type, %id, "Updated");
        Ok(slot)
    }

    /// Removes an entity and hands it back to the caller.
    pub fn remove(&mut self, id: &T::Id) -> Result<T, StoreError<T::Error>> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, "Delete");
        let Some(item) = self.store.get(id) else {
            warn!(entity_type, %id, "Not found");
            return Err(StoreError::NotFound(id.to_string()));
        };
        if let Err(e) = item.on_delete() {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(StoreError::Entity(e));
        }
        let removed = self
            .store
            .remove(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(removed)
    }

    /// Runs a custom action against one entity.
    pub fn perform_action(
        &mut self,
        id: &T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, StoreError<T::Error>> {
        let entity_type = Self::entity_type();
        debug!(entity_type, %id, ?action, "Action");
        let Some(slot) = self.store.get_mut(id) else {
            warn!(entity_type, %id, "Not found");
            return Err(StoreError::NotFound(id.to_string()));
        };
        let mut draft = slot.clone();
        match draft.handle_action(action) {
            Ok(result) => {
                *slot = draft;
                info!(entity_type, %id, "Action ok");
                Ok(result)
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Action failed");
                Err(StoreError::Entity(e))
            }
        }
    }
}
