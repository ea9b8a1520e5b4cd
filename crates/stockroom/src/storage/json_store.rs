use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::StorageError;
use crate::inventory::Inventory;
use crate::model::{Product, ProductCreate, ProductId};

/// On-disk form of one product.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProductRecord {
    id: ProductId,
    name: String,
    category: String,
    quantity: i64,
    price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().clone(),
            name: product.name().to_string(),
            category: product.category().to_string(),
            quantity: i64::from(product.quantity()),
            price: product.price(),
            updated_at: Some(product.updated_at()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct InventoryDocument {
    products: Vec<ProductRecord>,
}

/// Reads and writes an [`Inventory`] as a JSON file.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the inventory. A missing file yields an empty inventory.
    ///
    /// # Errors
    /// [`StorageError::Format`] when the content is not valid JSON, lacks required
    /// fields, holds a product that fails validation, or repeats an ID;
    /// [`StorageError::Io`] when the file exists but cannot be read.
    pub fn load(&self) -> Result<Inventory, StorageError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No inventory file, starting empty");
            return Ok(Inventory::new());
        }
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| StorageError::io(&self.path, e))?;
        let inventory = decode(&content).map_err(|reason| StorageError::format(&self.path, reason))?;
        info!(path = %self.path.display(), products = inventory.len(), "Inventory loaded");
        Ok(inventory)
    }

    /// Writes the inventory atomically: a temporary file in the same directory is
    /// written and synced, then renamed over the target.
    pub fn save(&self, inventory: &Inventory) -> Result<(), StorageError> {
        let content = encode(inventory)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            std::fs::create_dir_all(&dir).map_err(|e| StorageError::io(&dir, e))?;
        }

        // NamedTempFile deletes itself on drop, so every early return cleans up.
        let mut tmp = tempfile::NamedTempFile::new_in(&dir).map_err(|e| StorageError::io(&dir, e))?;
        let write = |tmp: &mut tempfile::NamedTempFile| -> std::io::Result<()> {
            tmp.write_all(content.as_bytes())?;
            tmp.flush()?;
            tmp.as_file().sync_all()
        };
        write(&mut tmp).map_err(|e| StorageError::io(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| StorageError::io(&self.path, e.error))?;

        info!(path = %self.path.display(), products = inventory.len(), "Inventory saved");
        Ok(())
    }
}

fn encode(inventory: &Inventory) -> Result<String, serde_json::Error> {
    let document = InventoryDocument {
        products: inventory.products().map(ProductRecord::from).collect(),
    };
    serde_json::to_string_pretty(&document)
}

fn decode(content: &str) -> Result<Inventory, String> {
    let value: serde_json::Value = serde_json::from_str(content).map_err(|e| e.to_string())?;
    let records: Vec<ProductRecord> = if value.is_array() {
        serde_json::from_value(value).map_err(|e| e.to_string())?
    } else {
        serde_json::from_value::<InventoryDocument>(value)
            .map_err(|e| e.to_string())?
            .products
    };
    debug!(records = records.len(), "Decoded inventory document");

    let loaded_at = Utc::now();
    let mut inventory = Inventory::new();
    for (index, record) in records.into_iter().enumerate() {
        let id = record.id.clone();
        let product = Product::new(
            record.id,
            ProductCreate {
                name: record.name,
                category: record.category,
                quantity: record.quantity,
                price: record.price,
            },
        )
        .map_err(|e| format!("product #{index} ({id}): {e}"))?
        .with_updated_at(record.updated_at.unwrap_or(loaded_at));
        inventory
            .add(product)
            .map_err(|e| format!("product #{index}: {e}"))?;
    }
    Ok(inventory)
}
