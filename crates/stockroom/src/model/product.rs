//! The product record and its creation and update payloads.
//!
//! [`Product`] implements [`StoreEntity`](stock_store::StoreEntity) so it can be kept in
//! a [`ResourceStore`](stock_store::ResourceStore); the impl lives in
//! [`crate::product::entity`] together with the custom
//! [`ProductAction`](crate::product::ProductAction)s.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::product::validate;
use crate::product::ProductError;

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One inventory line item.
///
/// Fields are private: every value held here has passed [`validate`], and the only
/// way to change one is through [`ProductUpdate`] or a
/// [`ProductAction`](crate::product::ProductAction), which re-run the same checks.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    quantity: u32,
    price: f64,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new Product, validating every field.
    ///
    /// # Errors
    /// [`ProductError::Validation`] for an empty id, name or category, an over-long
    /// name or category, a negative quantity, or a negative or non-finite price.
    pub fn new(id: impl Into<ProductId>, params: ProductCreate) -> Result<Self, ProductError> {
        let id = id.into();
        validate::id(&id)?;
        Ok(Self {
            id,
            name: validate::name(params.name)?,
            category: validate::category(params.category)?,
            quantity: validate::quantity(params.quantity)?,
            price: validate::price(params.price)?,
            updated_at: Utc::now(),
        })
    }

    /// Replaces the last-updated timestamp, used when restoring saved records.
    pub(crate) fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Stock value of this line: quantity × unit price.
    pub fn total_value(&self) -> f64 {
        f64::from(self.quantity) * self.price
    }

    /// Unit price after taking `percent` (0..=100) off.
    pub fn discounted_price(&self, percent: f64) -> Result<f64, ProductError> {
        let percent = validate::discount_percent(percent)?;
        Ok(self.price * (100.0 - percent) / 100.0)
    }

    /// Applies a validated update. All fields are checked before any is written.
    pub(crate) fn apply(&mut self, update: ProductUpdate) -> Result<(), ProductError> {
        if update.is_empty() {
            return Ok(());
        }
        let name = update.name.map(validate::name).transpose()?;
        let category = update.category.map(validate::category).transpose()?;
        let quantity = update.quantity.map(validate::quantity).transpose()?;
        let price = update.price.map(validate::price).transpose()?;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(category) = category {
            self.category = category;
        }
        if let Some(quantity) = quantity {
            self.quantity = quantity;
        }
        if let Some(price) = price {
            self.price = price;
        }
        self.touch();
        Ok(())
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {} | price: ${:.2} | stock: {} | updated: {}",
            self.id,
            self.name,
            self.category,
            self.price,
            self.quantity,
            self.updated_at.format("%Y-%m-%d %H:%M")
        )
    }
}

/// Payload for creating a new product.
///
/// Quantity is signed here so that a negative input reaches validation and is
/// reported as such, rather than failing somewhere in parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub category: String,
    pub quantity: i64,
    pub price: f64,
}

/// Partial update for a product; `None` leaves the field as it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<i64>,
    pub price: Option<f64>,
}

impl ProductUpdate {
    pub fn quantity(quantity: i64) -> Self {
        Self {
            quantity: Some(quantity),
            ..Self::default()
        }
    }

    pub fn price(price: f64) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
    }
}
