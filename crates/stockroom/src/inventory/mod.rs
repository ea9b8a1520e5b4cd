//! # Inventory
//!
//! The [`Inventory`] owns the product store and exposes every collection-level
//! operation: adding and removing products, validated updates, stock actions,
//! search, and the valuation and statistics reports.
//!
//! ```rust
//! use stockroom::inventory::Inventory;
//! use stockroom::model::{ProductCreate, ProductUpdate};
//! use stockroom::StoreClient;
//!
//! let mut inventory = Inventory::new();
//! inventory
//!     .add_new("P-1", ProductCreate {
//!         name: "Desk lamp".into(),
//!         category: "Lighting".into(),
//!         quantity: 2,
//!         price: 3.0,
//!     })
//!     .unwrap();
//! inventory.update(&"P-1".into(), ProductUpdate::quantity(4)).unwrap();
//!
//! assert_eq!(inventory.get(&"P-1".into()).unwrap().quantity(), 4);
//! assert_eq!(inventory.total_value(), 12.0);
//! ```

pub mod report;

pub use report::*;

use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product::{ProductAction, ProductActionResult, ProductError};
use stock_store::{ResourceStore, StoreClient, StoreError};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Threshold used when a caller supplies none, or an unusable one.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 10;

/// The in-memory product collection.
#[derive(Debug, Clone)]
pub struct Inventory {
    products: ResourceStore<Product>,
    low_stock_threshold: u32,
}

impl Default for Inventory {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreClient<Product> for Inventory {
    type Error = ProductError;

    fn inner(&self) -> &ResourceStore<Product> {
        &self.products
    }

    fn inner_mut(&mut self) -> &mut ResourceStore<Product> {
        &mut self.products
    }

    fn map_error(e: StoreError<ProductError>) -> ProductError {
        match e {
            StoreError::Duplicate(id) => ProductError::DuplicateId(id.into()),
            StoreError::NotFound(id) => ProductError::NotFound(id.into()),
            StoreError::Entity(e) => e,
        }
    }
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            products: ResourceStore::new(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }

    pub fn with_low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.low_stock_threshold
    }

    pub fn set_low_stock_threshold(&mut self, threshold: u32) {
        self.low_stock_threshold = threshold;
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in ID order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    // --- CRUD ---

    /// Adds a constructed product.
    #[instrument(skip(self, product), fields(id = %product.id()))]
    pub fn add(&mut self, product: Product) -> Result<(), ProductError> {
        self.products
            .insert(product)
            .map(|_| ())
            .map_err(Self::map_error)
    }

    /// Validates `params` and adds the resulting product under `id`.
    #[instrument(skip_all)]
    pub fn add_new(
        &mut self,
        id: impl Into<ProductId>,
        params: ProductCreate,
    ) -> Result<ProductId, ProductError> {
        self.products
            .create(id.into(), params)
            .map_err(Self::map_error)
    }

    /// Applies a partial update. Nothing changes if any field is rejected.
    #[instrument(skip(self))]
    pub fn update(&mut self, id: &ProductId, update: ProductUpdate) -> Result<&Product, ProductError> {
        self.products.update(id, update).map_err(Self::map_error)
    }

    pub fn set_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<&Product, ProductError> {
        self.update(id, ProductUpdate::quantity(quantity))
    }

    pub fn set_price(&mut self, id: &ProductId, price: f64) -> Result<&Product, ProductError> {
        self.update(id, ProductUpdate::price(price))
    }

    // --- Stock actions ---

    #[instrument(skip(self))]
    pub fn check_stock(&mut self, id: &ProductId) -> Result<u32, ProductError> {
        match self.act(id, ProductAction::CheckStock)? {
            ProductActionResult::CheckStock(level) => Ok(level),
            _ => unreachable!("CheckStock action must return CheckStock result"),
        }
    }

    /// Adds received units; returns the new level.
    #[instrument(skip(self))]
    pub fn restock(&mut self, id: &ProductId, units: u32) -> Result<u32, ProductError> {
        match self.act(id, ProductAction::Restock(units))? {
            ProductActionResult::Restock(level) => Ok(level),
            _ => unreachable!("Restock action must return Restock result"),
        }
    }

    /// Takes units out of stock; returns the new level.
    #[instrument(skip(self))]
    pub fn withdraw(&mut self, id: &ProductId, units: u32) -> Result<u32, ProductError> {
        match self.act(id, ProductAction::Withdraw(units))? {
            ProductActionResult::Withdraw(level) => Ok(level),
            _ => unreachable!("Withdraw action must return Withdraw result"),
        }
    }

    #[instrument(skip(self))]
    pub fn quote_discount(&mut self, id: &ProductId, percent: f64) -> Result<f64, ProductError> {
        match self.act(id, ProductAction::QuoteDiscount(percent))? {
            ProductActionResult::QuoteDiscount(price) => Ok(price),
            _ => unreachable!("QuoteDiscount action must return QuoteDiscount result"),
        }
    }

    fn act(&mut self, id: &ProductId, action: ProductAction) -> Result<ProductActionResult, ProductError> {
        self.products
            .perform_action(id, action)
            .map_err(Self::map_error)
    }

    // --- Search ---

    /// Products whose name contains `needle`, ignoring case.
    pub fn find_by_name(&self, needle: &str) -> Vec<&Product> {
        let needle = needle.to_lowercase();
        let found: Vec<&Product> = self
            .products()
            .filter(|p| p.name().to_lowercase().contains(&needle))
            .collect();
        debug!(needle = %needle, found = found.len(), "find_by_name");
        found
    }

    /// Products whose category equals `category`, ignoring case and surrounding spaces.
    pub fn find_by_category(&self, category: &str) -> Vec<&Product> {
        let wanted = category_key(category);
        let found: Vec<&Product> = self
            .products()
            .filter(|p| category_key(p.category()) == wanted)
            .collect();
        debug!(category = %wanted, found = found.len(), "find_by_category");
        found
    }

    // --- Reports ---

    /// Products with quantity strictly below `threshold`.
    ///
    /// A missing or negative threshold falls back to [`DEFAULT_LOW_STOCK_THRESHOLD`];
    /// values above `u32::MAX` saturate.
    pub fn low_stock_report(&self, threshold: Option<i64>) -> LowStockReport<'_> {
        let threshold = effective_threshold(threshold);
        LowStockReport {
            threshold,
            products: self
                .products()
                .filter(|p| p.quantity() < threshold)
                .collect(),
        }
    }

    /// Sum of every product's quantity × price; 0 for an empty inventory.
    pub fn total_value(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.products().map(Product::total_value).sum()
    }

    pub fn total_quantity(&self) -> u64 {
        self.products().map(|p| u64::from(p.quantity())).sum()
    }

    pub fn valuation(&self) -> ValuationReport {
        ValuationReport {
            product_count: self.len(),
            total_quantity: self.total_quantity(),
            total_value: self.total_value(),
        }
    }

    pub fn most_expensive(&self) -> Option<&Product> {
        self.products()
            .max_by(|a, b| a.price().total_cmp(&b.price()))
    }

    pub fn cheapest(&self) -> Option<&Product> {
        self.products()
            .min_by(|a, b| a.price().total_cmp(&b.price()))
    }

    /// Mean unit price per category.
    pub fn average_price_by_category(&self) -> BTreeMap<String, f64> {
        self.category_breakdown()
            .into_iter()
            .map(|(category, stats)| (category, stats.average_price))
            .collect()
    }

    /// Aggregates per category, grouped the way [`Self::find_by_category`] matches.
    /// Each group is labelled with the first spelling met in ID order.
    fn category_breakdown(&self) -> BTreeMap<String, CategoryBreakdown> {
        let mut categories: BTreeMap<String, (String, CategoryBreakdown, f64)> = BTreeMap::new();
        for product in self.products() {
            let (_, stats, price_sum) = categories
                .entry(category_key(product.category()))
                .or_insert_with(|| (product.category().to_string(), CategoryBreakdown::default(), 0.0));
            stats.product_count += 1;
            stats.total_quantity += u64::from(product.quantity());
            stats.total_value += product.total_value();
            *price_sum += product.price();
        }
        categories
            .into_values()
            .map(|(category, mut stats, price_sum)| {
                // product_count is at least 1 for every entry
                stats.average_price = price_sum / stats.product_count as f64;
                (category, stats)
            })
            .collect()
    }

    /// Count, value, average price, per-category breakdown and recommendations.
    #[instrument(skip(self), fields(size = self.len()))]
    pub fn statistics(&self) -> Statistics {
        let product_count = self.len();
        let total_value = self.total_value();
        let average_price = if product_count == 0 {
            0.0
        } else {
            self.products().map(Product::price).sum::<f64>() / product_count as f64
        };
        let categories = self.category_breakdown();
        let recommendations = self.recommendations(&categories, total_value);

        Statistics {
            product_count,
            total_quantity: self.total_quantity(),
            total_value,
            average_price,
            most_expensive: self.most_expensive().map(|p| p.id().clone()),
            cheapest: self.cheapest().map(|p| p.id().clone()),
            categories,
            recommendations,
        }
    }

    fn recommendations(
        &self,
        categories: &BTreeMap<String, CategoryBreakdown>,
        total_value: f64,
    ) -> Vec<Recommendation> {
        if self.is_empty() {
            return vec![Recommendation::EmptyInventory];
        }

        let mut recommendations: Vec<Recommendation> = self
            .products()
            .filter(|p| p.quantity() == 0)
            .map(|p| Recommendation::OutOfStock { id: p.id().clone() })
            .collect();

        let threshold = self.low_stock_threshold;
        for (category, stats) in categories {
            if stats.total_quantity < u64::from(threshold) {
                recommendations.push(Recommendation::RestockCategory {
                    category: category.clone(),
                    quantity: stats.total_quantity,
                    threshold,
                });
            }
        }

        if categories.len() > 1 && total_value > 0.0 {
            for (category, stats) in categories {
                let share = stats.total_value / total_value;
                if share > CONCENTRATION_SHARE {
                    recommendations.push(Recommendation::ValueConcentration {
                        category: category.clone(),
                        share,
                    });
                }
            }
        }
        recommendations
    }
}

fn category_key(category: &str) -> String {
    category.trim().to_lowercase()
}

fn effective_threshold(threshold: Option<i64>) -> u32 {
    match threshold {
        Some(t) if t >= 0 => u32::try_from(t).unwrap_or(u32::MAX),
        _ => DEFAULT_LOW_STOCK_THRESHOLD,
    }
}
