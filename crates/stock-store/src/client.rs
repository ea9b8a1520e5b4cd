//! # StoreClient Trait
//!
//! Provides a common interface for resource-specific wrappers around a
//! [`ResourceStore`], adding default `get` and `remove` operations on top of it.
use crate::{ResourceStore, StoreEntity, StoreError};

/// Trait for resource-specific wrappers to inherit standard store operations.
///
/// Implementors own a [`ResourceStore`] and translate [`StoreError`] into their
/// domain error type through [`StoreClient::map_error`].
///
/// # Example
///
/// ```rust
/// use stock_store::{ResourceStore, StoreClient, StoreEntity, StoreError};
///
/// #[derive(Clone, Debug)] struct Shelf { id: u32 }
/// #[derive(Debug)] struct ShelfCreate;
/// #[derive(Debug)] struct ShelfUpdate;
/// #[derive(Debug)] enum ShelfAction {}
/// #[derive(Debug, thiserror::Error)] #[error("shelf error: {0}")] struct ShelfError(String);
///
/// impl StoreEntity for Shelf {
///     type Id = u32; type Create = ShelfCreate; type Update = ShelfUpdate;
///     type Action = ShelfAction; type ActionResult = (); type Error = ShelfError;
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create_params(id: u32, _: ShelfCreate) -> Result<Self, ShelfError> { Ok(Self { id }) }
///     fn on_update(&mut self, _: ShelfUpdate) -> Result<(), ShelfError> { Ok(()) }
///     fn handle_action(&mut self, action: ShelfAction) -> Result<(), ShelfError> { match action {} }
/// }
///
/// struct Shelves { inner: ResourceStore<Shelf> }
///
/// impl StoreClient<Shelf> for Shelves {
///     type Error = ShelfError;
///     fn inner(&self) -> &ResourceStore<Shelf> { &self.inner }
///     fn inner_mut(&mut self) -> &mut ResourceStore<Shelf> { &mut self.inner }
///     fn map_error(e: StoreError<ShelfError>) -> ShelfError { ShelfError(e.to_string()) }
/// }
///
/// let mut shelves = Shelves { inner: ResourceStore::new() };
/// shelves.inner_mut().create(1, ShelfCreate).unwrap();
/// // get() and remove() are provided automatically
/// assert!(shelves.get(&1).is_some());
/// assert!(shelves.remove(&1).is_ok());
/// assert!(shelves.remove(&1).is_err());
/// ```
pub trait StoreClient<T: StoreEntity> {
    /// The resource-specific error type.
    type Error;

    /// Access the wrapped store.
    fn inner(&self) -> &ResourceStore<T>;

    /// Mutable access to the wrapped store.
    fn inner_mut(&mut self) -> &mut ResourceStore<T>;

    /// Map store errors to the resource-specific error type.
    fn map_error(e: StoreError<T::Error>) -> Self::Error;

    /// Fetch an entity by ID.
    fn get(&self, id: &T::Id) -> Option<&T> {
        self.inner().get(id)
    }

    /// Delete an entity by ID, returning it.
    #[tracing::instrument(skip(self))]
    fn remove(&mut self, id: &T::Id) -> Result<T, Self::Error> {
        tracing::debug!("Removing");
        self.inner_mut().remove(id).map_err(Self::map_error)
    }
}
