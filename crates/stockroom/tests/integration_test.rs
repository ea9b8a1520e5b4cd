use pretty_assertions::assert_eq;
use stockroom::inventory::{Inventory, Recommendation};
use stockroom::model::{ProductCreate, ProductId, ProductUpdate};
use stockroom::product::ProductError;
use stockroom::storage::{JsonStore, StorageError};
use stockroom::StoreClient;

fn create(name: &str, category: &str, quantity: i64, price: f64) -> ProductCreate {
    ProductCreate {
        name: name.to_string(),
        category: category.to_string(),
        quantity,
        price,
    }
}

fn sample() -> Inventory {
    let mut inventory = Inventory::new();
    inventory.add_new("A", create("Anvil", "Tools", 2, 4.0)).unwrap();
    inventory.add_new("B", create("Bolt", "Hardware", 6, 0.5)).unwrap();
    inventory.add_new("C", create("Chisel", "Tools", 4, 0.0)).unwrap();
    inventory
}

#[test]
fn test_added_product_can_be_found() {
    let mut inventory = Inventory::new();
    let id = inventory
        .add_new("LAP-1", create("Laptop", "Electronics", 3, 999.99))
        .expect("Failed to add product");

    let product = inventory.get(&id).expect("Product not found");
    assert_eq!(product.name(), "Laptop");
    assert_eq!(product.category(), "Electronics");
    assert_eq!(product.quantity(), 3);
    assert_eq!(product.price(), 999.99);

    assert_eq!(inventory.find_by_name("lap").len(), 1);
    assert_eq!(inventory.find_by_category(" electronics ").len(), 1);
    assert!(inventory.find_by_category("Electro").is_empty());
}

#[test]
fn test_duplicate_id_is_rejected() {
    let mut inventory = sample();
    let err = inventory
        .add_new("A", create("Axe", "Tools", 1, 10.0))
        .unwrap_err();
    assert_eq!(err, ProductError::DuplicateId(ProductId::from("A")));
    assert_eq!(inventory.get(&"A".into()).unwrap().name(), "Anvil");
}

#[test]
fn test_removed_product_is_gone() {
    let mut inventory = sample();
    let removed = inventory.remove(&"B".into()).expect("Failed to remove");
    assert_eq!(removed.name(), "Bolt");
    assert!(inventory.get(&"B".into()).is_none());
    assert_eq!(
        inventory.remove(&"B".into()).unwrap_err(),
        ProductError::NotFound(ProductId::from("B"))
    );
}

#[test]
fn test_total_value() {
    assert_eq!(Inventory::new().total_value(), 0.0);

    let mut pair = Inventory::new();
    pair.add_new("X", create("Xylophone", "Music", 2, 3.0)).unwrap();
    pair.add_new("Y", create("Yo-yo", "Toys", 1, 5.0)).unwrap();
    assert_eq!(pair.total_value(), 11.0);

    // 2 * 4.0 + 6 * 0.5 + 4 * 0.0
    assert_eq!(sample().total_value(), 11.0);
}

#[test]
fn test_low_stock_report_is_strictly_below() {
    let inventory = sample();
    let report = inventory.low_stock_report(Some(5));
    let ids: Vec<&str> = report.products.iter().map(|p| p.id().as_str()).collect();
    assert_eq!(ids, vec!["A", "C"]);

    assert!(inventory.low_stock_report(Some(2)).is_empty());
    // negative falls back to the default of 10
    assert_eq!(inventory.low_stock_report(Some(-3)).threshold, 10);
    assert_eq!(inventory.low_stock_report(None).products.len(), 3);
}

#[test]
fn test_update_missing_product_changes_nothing() {
    let mut inventory = sample();
    let before = inventory.clone();
    let err = inventory
        .update(&"Z".into(), ProductUpdate::quantity(1))
        .unwrap_err();
    assert_eq!(err, ProductError::NotFound(ProductId::from("Z")));
    assert_eq!(
        inventory.products().collect::<Vec<_>>(),
        before.products().collect::<Vec<_>>()
    );
}

#[test]
fn test_invalid_update_changes_nothing() {
    let mut inventory = sample();
    let err = inventory.set_price(&"A".into(), -1.0).unwrap_err();
    assert!(matches!(err, ProductError::Validation { field: "price", .. }));
    assert_eq!(inventory.get(&"A".into()).unwrap().price(), 4.0);

    let product = inventory.set_quantity(&"A".into(), 9).unwrap();
    assert_eq!(product.quantity(), 9);
}

#[test]
fn test_stock_actions() {
    let mut inventory = sample();
    let id = ProductId::from("B");
    assert_eq!(inventory.restock(&id, 4).unwrap(), 10);
    assert_eq!(inventory.withdraw(&id, 3).unwrap(), 7);
    assert_eq!(inventory.check_stock(&id).unwrap(), 7);
    assert_eq!(
        inventory.withdraw(&id, 8).unwrap_err(),
        ProductError::InsufficientStock {
            requested: 8,
            available: 7
        }
    );
    assert_eq!(inventory.quote_discount(&"A".into(), 25.0).unwrap(), 3.0);
}

#[test]
fn test_statistics_of_empty_inventory() {
    let stats = Inventory::new().statistics();
    assert_eq!(stats.product_count, 0);
    assert_eq!(stats.total_value, 0.0);
    assert_eq!(stats.average_price, 0.0);
    assert_eq!(stats.most_expensive, None);
    assert_eq!(stats.recommendations, vec![Recommendation::EmptyInventory]);
}

#[test]
fn test_statistics() {
    let mut inventory = sample();
    inventory.set_quantity(&"C".into(), 0).unwrap();
    inventory.set_low_stock_threshold(6);
    let stats = inventory.statistics();

    assert_eq!(stats.product_count, 3);
    assert_eq!(stats.total_quantity, 8);
    assert_eq!(stats.average_price, 1.5);
    assert_eq!(stats.most_expensive, Some(ProductId::from("A")));
    assert_eq!(stats.cheapest, Some(ProductId::from("C")));
    assert_eq!(stats.categories["Tools"].product_count, 2);
    assert_eq!(stats.categories["Tools"].average_price, 2.0);
    assert_eq!(
        inventory.average_price_by_category()["Hardware"],
        0.5
    );

    assert!(stats
        .recommendations
        .contains(&Recommendation::OutOfStock { id: "C".into() }));
    assert!(stats.recommendations.iter().any(|r| matches!(
        r,
        Recommendation::ValueConcentration { category, .. } if category == "Tools"
    )));

    // Tools holds 2 units, Hardware exactly the threshold
    assert!(stats.recommendations.contains(&Recommendation::RestockCategory {
        category: "Tools".into(),
        quantity: 2,
        threshold: 6,
    }));
    assert!(!stats.recommendations.iter().any(|r| matches!(
        r,
        Recommendation::RestockCategory { category, .. } if category == "Hardware"
    )));
}

#[test]
fn test_categories_group_like_search() {
    let mut inventory = Inventory::new();
    inventory.add_new("A", create("Anvil", "Tools", 3, 4.0)).unwrap();
    inventory.add_new("B", create("Bolt", "tools ", 4, 1.0)).unwrap();
    inventory.add_new("C", create("Cable", "Electrical", 20, 1.0)).unwrap();

    assert_eq!(inventory.get(&"B".into()).unwrap().category(), "tools");
    assert_eq!(inventory.find_by_category("TOOLS").len(), 2);

    let stats = inventory.statistics();
    assert_eq!(
        stats.categories.keys().collect::<Vec<_>>(),
        vec!["Electrical", "Tools"]
    );
    assert_eq!(stats.categories["Tools"].product_count, 2);
    assert_eq!(stats.categories["Tools"].total_quantity, 7);
    assert_eq!(stats.categories["Tools"].average_price, 2.5);
    assert!(stats.recommendations.contains(&Recommendation::RestockCategory {
        category: "Tools".into(),
        quantity: 7,
        threshold: 10,
    }));
}

#[test]
fn test_save_then_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path().join("data").join("inventory.json"));
    let inventory = sample();

    store.save(&inventory).expect("Failed to save");
    let loaded = store.load().expect("Failed to load");

    assert_eq!(
        loaded.products().collect::<Vec<_>>(),
        inventory.products().collect::<Vec<_>>()
    );
}

#[test]
fn test_save_then_load_keeps_exact_prices() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path().join("inventory.json"));

    let mut inventory = Inventory::new();
    for i in 0..2_000u64 {
        let raw = (i.wrapping_mul(2_654_435_761) % 1_000_000_000_000) as f64;
        let price = raw / 1e6 * 1.000_000_123_456_789;
        inventory
            .add_new(format!("P-{i:05}"), create("Part", "Spares", 1, price))
            .unwrap();
    }

    store.save(&inventory).unwrap();
    let loaded = store.load().unwrap();

    let differing: Vec<(f64, f64)> = inventory
        .products()
        .zip(loaded.products())
        .map(|(saved, read)| (saved.price(), read.price()))
        .filter(|(saved, read)| saved.to_bits() != read.to_bits())
        .collect();
    assert_eq!(differing, Vec::<(f64, f64)>::new());
    assert_eq!(loaded.len(), 2_000);
}

#[test]
fn test_missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let inventory = JsonStore::new(dir.path().join("absent.json")).load().unwrap();
    assert!(inventory.is_empty());
}

#[test]
fn test_malformed_file_is_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inventory.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = JsonStore::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::Format { .. }), "got {err:?}");
    // the file is left as it was
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ not json");
}
