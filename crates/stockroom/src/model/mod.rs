//! Plain data structures managed by the [`ResourceStore`](stock_store::ResourceStore).

pub mod product;

pub use product::*;
