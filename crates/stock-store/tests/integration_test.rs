use pretty_assertions::assert_eq;
use stock_store::{ResourceStore, StoreClient, StoreEntity, StoreError};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Pallet {
    id: u32,
    label: String,
    sealed: bool,
}

#[derive(Debug)]
struct PalletCreate {
    label: String,
}

#[derive(Debug)]
struct PalletUpdate {
    label: Option<String>,
}

#[derive(Debug)]
enum PalletAction {
    Seal,
}

#[derive(Debug, thiserror::Error)]
enum PalletError {
    #[error("label must not be empty")]
    EmptyLabel,
    #[error("pallet is sealed")]
    Sealed,
    #[error("{0}")]
    Store(String),
}

impl StoreEntity for Pallet {
    type Id = u32;
    type Create = PalletCreate;
    type Update = PalletUpdate;
    type Action = PalletAction;
    type ActionResult = bool;
    type Error = PalletError;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_create_params(id: u32, params: PalletCreate) -> Result<Self, PalletError> {
        if params.label.is_empty() {
            return Err(PalletError::EmptyLabel);
        }
        Ok(Self {
            id,
            label: params.label,
            sealed: false,
        })
    }

    fn on_update(&mut self, update: PalletUpdate) -> Result<(), PalletError> {
        if self.sealed {
            return Err(PalletError::Sealed);
        }
        if let Some(label) = update.label {
            if label.is_empty() {
                return Err(PalletError::EmptyLabel);
            }
            self.label = label;
        }
        Ok(())
    }

    fn on_delete(&self) -> Result<(), PalletError> {
        if self.sealed {
            return Err(PalletError::Sealed);
        }
        Ok(())
    }

    fn handle_action(&mut self, action: PalletAction) -> Result<bool, PalletError> {
        match action {
            PalletAction::Seal => {
                let changed = !self.sealed;
                self.sealed = true;
                Ok(changed)
            }
        }
    }
}

// --- Domain wrapper ---

struct Yard {
    pallets: ResourceStore<Pallet>,
}

impl StoreClient<Pallet> for Yard {
    type Error = PalletError;

    fn inner(&self) -> &ResourceStore<Pallet> {
        &self.pallets
    }

    fn inner_mut(&mut self) -> &mut ResourceStore<Pallet> {
        &mut self.pallets
    }

    fn map_error(e: StoreError<PalletError>) -> PalletError {
        match e {
            StoreError::Entity(inner) => inner,
            other => PalletError::Store(other.to_string()),
        }
    }
}

#[test]
fn test_pallet_lifecycle() {
    let mut yard = Yard {
        pallets: ResourceStore::new(),
    };

    let id = yard
        .inner_mut()
        .create(
            1,
            PalletCreate {
                label: "inbound".into(),
            },
        )
        .unwrap();
    assert_eq!(id, 1);

    let updated = yard
        .inner_mut()
        .update(
            &1,
            PalletUpdate {
                label: Some("outbound".into()),
            },
        )
        .unwrap()
        .clone();
    assert_eq!(updated.label, "outbound");

    assert!(yard.inner_mut().perform_action(&1, PalletAction::Seal).unwrap());
    assert!(!yard.inner_mut().perform_action(&1, PalletAction::Seal).unwrap());

    // sealed pallets refuse updates and deletion
    assert!(matches!(
        yard.inner_mut().update(&1, PalletUpdate { label: None }),
        Err(StoreError::Entity(PalletError::Sealed))
    ));
    assert!(matches!(yard.remove(&1), Err(PalletError::Sealed)));
    assert_eq!(yard.get(&1).map(|p| p.label.as_str()), Some("outbound"));
}

#[test]
fn test_invalid_create_leaves_store_empty() {
    let mut store = ResourceStore::<Pallet>::new();
    let err = store
        .create(5, PalletCreate { label: String::new() })
        .unwrap_err();
    assert!(matches!(err, StoreError::Entity(PalletError::EmptyLabel)));
    assert!(store.is_empty());
}

#[test]
fn test_remove_returns_entity_and_maps_missing() {
    let mut yard = Yard {
        pallets: ResourceStore::new(),
    };
    yard.inner_mut()
        .insert(Pallet {
            id: 9,
            label: "returns".into(),
            sealed: false,
        })
        .unwrap();

    let removed = yard.remove(&9).unwrap();
    assert_eq!(removed.label, "returns");

    match yard.remove(&9) {
        Err(PalletError::Store(msg)) => assert_eq!(msg, "Item not found: 9"),
        other => panic!("expected not-found, got {other:?}"),
    }
}
