//! Field rules shared by product creation, updates and loading from disk.

use super::ProductError;
use crate::model::ProductId;

pub const MAX_ID_LEN: usize = 64;
pub const MAX_NAME_LEN: usize = 100;
pub const MAX_CATEGORY_LEN: usize = 50;

pub fn id(id: &ProductId) -> Result<(), ProductError> {
    let raw = id.as_str();
    if raw.trim().is_empty() {
        return Err(ProductError::validation("id", "must not be empty"));
    }
    if raw.chars().count() > MAX_ID_LEN {
        return Err(ProductError::validation(
            "id",
            format!("must be at most {MAX_ID_LEN} characters"),
        ));
    }
    Ok(())
}

pub fn name(name: String) -> Result<String, ProductError> {
    text("name", name, MAX_NAME_LEN)
}

pub fn category(category: String) -> Result<String, ProductError> {
    text("category", category, MAX_CATEGORY_LEN)
}

/// Trims `value` and checks it is non-empty and at most `max_len` characters.
fn text(field: &'static str, value: String, max_len: usize) -> Result<String, ProductError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ProductError::validation(field, "must not be empty"));
    }
    if value.chars().count() > max_len {
        return Err(ProductError::validation(
            field,
            format!("must be at most {max_len} characters"),
        ));
    }
    Ok(value.to_string())
}

pub fn quantity(quantity: i64) -> Result<u32, ProductError> {
    if quantity < 0 {
        return Err(ProductError::validation("quantity", "must not be negative"));
    }
    u32::try_from(quantity)
        .map_err(|_| ProductError::validation("quantity", format!("must be at most {}", u32::MAX)))
}

pub fn price(price: f64) -> Result<f64, ProductError> {
    if !price.is_finite() {
        return Err(ProductError::validation("price", "must be a finite number"));
    }
    if price < 0.0 {
        return Err(ProductError::validation("price", "must not be negative"));
    }
    Ok(price)
}

pub fn discount_percent(percent: f64) -> Result<f64, ProductError> {
    if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return Err(ProductError::validation(
            "discount",
            "must be between 0 and 100 percent",
        ));
    }
    Ok(percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_bounds() {
        assert_eq!(quantity(0).unwrap(), 0);
        assert_eq!(quantity(i64::from(u32::MAX)).unwrap(), u32::MAX);
        assert!(quantity(-1).is_err());
        assert!(quantity(i64::from(u32::MAX) + 1).is_err());
    }

    #[test]
    fn test_text_length_counts_chars() {
        let exact: String = "é".repeat(MAX_NAME_LEN);
        assert!(name(exact).is_ok());
        let over: String = "é".repeat(MAX_NAME_LEN + 1);
        assert!(name(over).is_err());
    }

    #[test]
    fn test_text_is_trimmed() {
        assert_eq!(category("  tools \t".into()).unwrap(), "tools");
        assert!(name(" \n ".into()).is_err());
    }

    #[test]
    fn test_price_rejects_infinity() {
        assert!(price(f64::INFINITY).is_err());
        assert!(price(0.0).is_ok());
    }
}
