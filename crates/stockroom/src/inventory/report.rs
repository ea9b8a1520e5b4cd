//! Report values produced by [`Inventory`](super::Inventory).
//!
//! Each report is plain data with a `Display` impl that renders the text screen the
//! shell prints.

use crate::model::{Product, ProductId};
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// Share of total value above which a single category is flagged.
pub const CONCENTRATION_SHARE: f64 = 0.5;

/// Products whose quantity is strictly below `threshold`.
#[derive(Debug, Clone, PartialEq)]
pub struct LowStockReport<'a> {
    pub threshold: u32,
    pub products: Vec<&'a Product>,
}

impl LowStockReport<'_> {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Display for LowStockReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.products.is_empty() {
            return writeln!(f, "No products with stock below {} units.", self.threshold);
        }
        writeln!(f, "LOW STOCK REPORT (below {} units)", self.threshold)?;
        writeln!(f, "{}", "=".repeat(60))?;
        for product in &self.products {
            writeln!(f, "{product}")?;
        }
        Ok(())
    }
}

/// Collection-level valuation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationReport {
    pub product_count: usize,
    pub total_quantity: u64,
    pub total_value: f64,
}

impl Display for ValuationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "INVENTORY VALUE REPORT")?;
        writeln!(f, "{}", "=".repeat(40))?;
        writeln!(f, "Products: {}", self.product_count)?;
        writeln!(f, "Units in stock: {}", self.total_quantity)?;
        writeln!(f, "Total inventory value: ${:.2}", self.total_value)
    }
}

/// Per-category aggregates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown {
    pub product_count: usize,
    pub total_quantity: u64,
    pub total_value: f64,
    pub average_price: f64,
}

/// Rule-based hint attached to [`Statistics`].
#[derive(Debug, Clone, PartialEq)]
pub enum Recommendation {
    EmptyInventory,
    OutOfStock {
        id: ProductId,
    },
    RestockCategory {
        category: String,
        quantity: u64,
        threshold: u32,
    },
    ValueConcentration {
        category: String,
        share: f64,
    },
}

impl Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::EmptyInventory => {
                write!(f, "Inventory is empty; add products to start tracking stock.")
            }
            Recommendation::OutOfStock { id } => {
                write!(f, "Product {id} is out of stock; reorder it.")
            }
            Recommendation::RestockCategory {
                category,
                quantity,
                threshold,
            } => write!(
                f,
                "Category '{category}' holds only {quantity} units (threshold {threshold}); restock it."
            ),
            Recommendation::ValueConcentration { category, share } => write!(
                f,
                "Category '{category}' holds {:.0}% of inventory value; consider diversifying.",
                share * 100.0
            ),
        }
    }
}

/// Summary statistics over the whole inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Statistics {
    pub product_count: usize,
    pub total_quantity: u64,
    pub total_value: f64,
    /// Mean unit price; 0 for an empty inventory.
    pub average_price: f64,
    pub most_expensive: Option<ProductId>,
    pub cheapest: Option<ProductId>,
    pub categories: BTreeMap<String, CategoryBreakdown>,
    pub recommendations: Vec<Recommendation>,
}

impl Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "INVENTORY STATISTICS")?;
        writeln!(f, "{}", "=".repeat(40))?;
        writeln!(f, "Products: {}", self.product_count)?;
        writeln!(f, "Units in stock: {}", self.total_quantity)?;
        writeln!(f, "Total inventory value: ${:.2}", self.total_value)?;
        writeln!(f, "Average price: ${:.2}", self.average_price)?;
        if let Some(id) = &self.most_expensive {
            writeln!(f, "Most expensive: {id}")?;
        }
        if let Some(id) = &self.cheapest {
            writeln!(f, "Cheapest: {id}")?;
        }

        if !self.categories.is_empty() {
            writeln!(f)?;
            writeln!(f, "BY CATEGORY:")?;
            for (category, stats) in &self.categories {
                writeln!(
                    f,
                    "{category}: {} products, {} units, value ${:.2}, avg price ${:.2}",
                    stats.product_count,
                    stats.total_quantity,
                    stats.total_value,
                    stats.average_price
                )?;
            }
        }

        if !self.recommendations.is_empty() {
            writeln!(f)?;
            writeln!(f, "RECOMMENDATIONS:")?;
            for recommendation in &self.recommendations {
                writeln!(f, "- {recommendation}")?;
            }
        }
        Ok(())
    }
}
