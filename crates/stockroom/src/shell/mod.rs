//! # Interactive Shell
//!
//! The text menu front end. [`Shell`] owns the [`Inventory`] for the whole session
//! and the [`JsonStore`] it is saved to; every successful change is written to disk
//! straight away. If the write fails the change is rolled back in memory and the
//! error is shown, so the file and the session never disagree.
//!
//! The shell is generic over its input and output so that a scripted session can be
//! driven from a byte buffer in tests.

pub mod input;
pub mod render;

use crate::inventory::Inventory;
use crate::model::{ProductCreate, ProductId};
use crate::settings::DEFAULT_MAX_INPUT_LENGTH;
use crate::storage::JsonStore;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use stock_store::StoreClient;
use tracing::{info, warn};

const MENU: &str = "\
============================================================
                 STOCKROOM INVENTORY MANAGER
============================================================
1. Add product
2. Remove product
3. Update product stock
4. Update product price
5. Search products by name
6. Search products by category
7. List all products
8. Low-stock report
9. Inventory value report
10. Inventory statistics
11. Set low-stock threshold
12. Receive stock
13. Withdraw stock
14. Quote discounted price
0. Exit
============================================================";

pub struct Shell<R, W> {
    inventory: Inventory,
    store: JsonStore,
    input: R,
    out: W,
    max_input_length: usize,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(inventory: Inventory, store: JsonStore, input: R, out: W) -> Self {
        Self {
            inventory,
            store,
            input,
            out,
            max_input_length: DEFAULT_MAX_INPUT_LENGTH,
        }
    }

    pub fn with_max_input_length(mut self, max_input_length: usize) -> Self {
        self.max_input_length = max_input_length;
        self
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Runs the menu loop until the user picks 0 or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        info!(path = %self.store.path().display(), "Shell started");
        loop {
            writeln!(self.out, "\n{MENU}")?;
            let Some(choice) = self.prompt_number::<u32>("\nSelect an option: ")? else {
                break;
            };
            match choice {
                0 => break,
                1 => self.add_product()?,
                2 => self.remove_product()?,
                3 => self.update_stock()?,
                4 => self.update_price()?,
                5 => self.search_by_name()?,
                6 => self.search_by_category()?,
                7 => render::products(
                    &mut self.out,
                    self.inventory.products(),
                    "No products in the inventory.",
                )?,
                8 => {
                    let threshold = i64::from(self.inventory.low_stock_threshold());
                    write!(self.out, "{}", self.inventory.low_stock_report(Some(threshold)))?
                }
                9 => write!(self.out, "{}", self.inventory.valuation())?,
                10 => render::statistics(&mut self.out, &self.inventory)?,
                11 => self.set_threshold()?,
                12 => self.receive_stock()?,
                13 => self.withdraw_stock()?,
                14 => self.quote_discount()?,
                _ => writeln!(self.out, "Invalid option. Choose a number from 0 to 14.")?,
            }
        }
        writeln!(self.out, "\nGoodbye.")?;
        info!("Shell finished");
        Ok(())
    }

    // --- Menu actions ---

    fn add_product(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- ADD PRODUCT ---")?;
        let Some(id) = self.prompt_id("Product ID: ")? else {
            return Ok(());
        };
        if self.inventory.inner().contains(&id) {
            return writeln!(self.out, "Error: a product with ID '{id}' already exists.");
        }
        let Some(name) = self.prompt_text("Name: ")? else {
            return Ok(());
        };
        let Some(category) = self.prompt_text("Category: ")? else {
            return Ok(());
        };
        let Some(price) = self.prompt_number::<f64>("Price: $")? else {
            return Ok(());
        };
        let Some(quantity) = self.prompt_number::<i64>("Quantity in stock: ")? else {
            return Ok(());
        };

        let snapshot = self.inventory.clone();
        let params = ProductCreate {
            name: name.clone(),
            category,
            quantity,
            price,
        };
        match self.inventory.add_new(id, params) {
            Ok(_) => {
                if self.commit(snapshot)? {
                    writeln!(self.out, "Product '{name}' added.")?;
                }
                Ok(())
            }
            Err(e) => writeln!(self.out, "Error: {e}"),
        }
    }

    fn remove_product(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- REMOVE PRODUCT ---")?;
        let Some(id) = self.prompt_id("ID of the product to remove: ")? else {
            return Ok(());
        };
        let Some(product) = self.inventory.get(&id).cloned() else {
            return writeln!(self.out, "Error: no product with ID '{id}'.");
        };
        writeln!(self.out, "\nProduct: {product}")?;
        let Some(answer) = self.prompt_text("Remove this product? (y/n): ")? else {
            return Ok(());
        };
        if !input::is_affirmative(&answer) {
            return writeln!(self.out, "Cancelled.");
        }

        let snapshot = self.inventory.clone();
        match self.inventory.remove(&id) {
            Ok(removed) => {
                if self.commit(snapshot)? {
                    writeln!(self.out, "Product '{}' removed.", removed.name())?;
                }
                Ok(())
            }
            Err(e) => writeln!(self.out, "Error: {e}"),
        }
    }

    fn update_stock(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- UPDATE STOCK ---")?;
        let Some(id) = self.prompt_existing_id()? else {
            return Ok(());
        };
        let current = self.inventory.get(&id).map(|p| p.quantity()).unwrap_or_default();
        let Some(quantity) = self.prompt_number::<i64>(&format!("New quantity (current: {current}): "))?
        else {
            return Ok(());
        };

        let snapshot = self.inventory.clone();
        match self.inventory.set_quantity(&id, quantity).map(|p| p.quantity()) {
            Ok(level) => {
                if self.commit(snapshot)? {
                    writeln!(self.out, "Stock updated to {level} units.")?;
                }
                Ok(())
            }
            Err(e) => writeln!(self.out, "Error: {e}"),
        }
    }

    fn update_price(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- UPDATE PRICE ---")?;
        let Some(id) = self.prompt_existing_id()? else {
            return Ok(());
        };
        let current = self.inventory.get(&id).map(|p| p.price()).unwrap_or_default();
        let Some(price) = self.prompt_number::<f64>(&format!("New price (current: ${current:.2}): $"))?
        else {
            return Ok(());
        };

        let snapshot = self.inventory.clone();
        match self.inventory.set_price(&id, price).map(|p| p.price()) {
            Ok(price) => {
                if self.commit(snapshot)? {
                    writeln!(self.out, "Price updated to ${price:.2}.")?;
                }
                Ok(())
            }
            Err(e) => writeln!(self.out, "Error: {e}"),
        }
    }

    fn search_by_name(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- SEARCH BY NAME ---")?;
        let Some(needle) = self.prompt_text("Name or part of the name: ")? else {
            return Ok(());
        };
        let found = self.inventory.find_by_name(&needle);
        render::products(
            &mut self.out,
            found,
            &format!("No products matching '{needle}'."),
        )
    }

    fn search_by_category(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- SEARCH BY CATEGORY ---")?;
        let Some(category) = self.prompt_text("Category: ")? else {
            return Ok(());
        };
        let found = self.inventory.find_by_category(&category);
        render::products(
            &mut self.out,
            found,
            &format!("No products in category '{category}'."),
        )
    }

    fn set_threshold(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- LOW-STOCK THRESHOLD ---")?;
        writeln!(self.out, "Current threshold: {}", self.inventory.low_stock_threshold())?;
        let Some(threshold) = self.prompt_number::<i64>("New threshold: ")? else {
            return Ok(());
        };
        match u32::try_from(threshold) {
            Ok(threshold) => {
                self.inventory.set_low_stock_threshold(threshold);
                info!(threshold, "Low-stock threshold changed");
                writeln!(self.out, "Low-stock threshold set to {threshold}.")
            }
            Err(_) => writeln!(self.out, "Error: the threshold must be between 0 and {}.", u32::MAX),
        }
    }

    fn receive_stock(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- RECEIVE STOCK ---")?;
        let Some(id) = self.prompt_existing_id()? else {
            return Ok(());
        };
        let Some(units) = self.prompt_number::<u32>("Units received: ")? else {
            return Ok(());
        };
        let snapshot = self.inventory.clone();
        match self.inventory.restock(&id, units) {
            Ok(level) => {
                if self.commit(snapshot)? {
                    writeln!(self.out, "Stock is now {level} units.")?;
                }
                Ok(())
            }
            Err(e) => writeln!(self.out, "Error: {e}"),
        }
    }

    fn withdraw_stock(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- WITHDRAW STOCK ---")?;
        let Some(id) = self.prompt_existing_id()? else {
            return Ok(());
        };
        let Some(units) = self.prompt_number::<u32>("Units to withdraw: ")? else {
            return Ok(());
        };
        let snapshot = self.inventory.clone();
        match self.inventory.withdraw(&id, units) {
            Ok(level) => {
                if self.commit(snapshot)? {
                    writeln!(self.out, "Stock is now {level} units.")?;
                }
                Ok(())
            }
            Err(e) => writeln!(self.out, "Error: {e}"),
        }
    }

    fn quote_discount(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n--- QUOTE DISCOUNT ---")?;
        let Some(id) = self.prompt_existing_id()? else {
            return Ok(());
        };
        let Some(percent) = self.prompt_number::<f64>("Discount percent (0-100): ")? else {
            return Ok(());
        };
        match self.inventory.quote_discount(&id, percent) {
            Ok(price) => writeln!(self.out, "Discounted price: ${price:.2}"),
            Err(e) => writeln!(self.out, "Error: {e}"),
        }
    }

    // --- Persistence ---

    /// Saves the current inventory. On failure the in-memory state goes back to
    /// `snapshot` and `false` is returned.
    fn commit(&mut self, snapshot: Inventory) -> io::Result<bool> {
        match self.store.save(&self.inventory) {
            Ok(()) => Ok(true),
            Err(e) => {
                warn!(error = %e, "Save failed, change rolled back");
                self.inventory = snapshot;
                writeln!(self.out, "Error: {e}. The change was not applied.")?;
                Ok(false)
            }
        }
    }

    // --- Prompts ---

    /// Reads one line; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }

    fn prompt_text(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(self
            .read_line()?
            .map(|line| input::sanitize(&line, self.max_input_length)))
    }

    /// Prompts until the answer parses as `T`.
    fn prompt_number<T: FromStr>(&mut self, message: &str) -> io::Result<Option<T>> {
        loop {
            let Some(text) = self.prompt_text(message)? else {
                return Ok(None);
            };
            match text.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.out, "Error: please enter a valid number.")?,
            }
        }
    }

    fn prompt_id(&mut self, message: &str) -> io::Result<Option<ProductId>> {
        let Some(text) = self.prompt_text(message)? else {
            return Ok(None);
        };
        if !input::is_safe_id(&text) {
            writeln!(
                self.out,
                "Error: product IDs may not contain any of {}",
                input::FORBIDDEN_ID_CHARS.iter().collect::<String>()
            )?;
            return Ok(None);
        }
        Ok(Some(ProductId::from(text)))
    }

    fn prompt_existing_id(&mut self) -> io::Result<Option<ProductId>> {
        let Some(id) = self.prompt_id("Product ID: ")? else {
            return Ok(None);
        };
        match self.inventory.get(&id) {
            Some(product) => {
                writeln!(self.out, "\nProduct: {product}")?;
                Ok(Some(id))
            }
            None => {
                writeln!(self.out, "Error: no product with ID '{id}'.")?;
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductCreate;
    use std::io::Cursor;

    fn shell_with(script: &str, inventory: Inventory) -> (Shell<Cursor<Vec<u8>>, Vec<u8>>, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path().join("inventory.json"));
        let shell = Shell::new(
            inventory,
            store,
            Cursor::new(script.as_bytes().to_vec()),
            Vec::new(),
        );
        (shell, dir)
    }

    fn output(shell: &Shell<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(&shell.out).into_owned()
    }

    fn stocked() -> Inventory {
        let mut inventory = Inventory::new();
        inventory
            .add_new(
                "K-1",
                ProductCreate {
                    name: "Kettle".into(),
                    category: "Kitchen".into(),
                    quantity: 4,
                    price: 20.0,
                },
            )
            .unwrap();
        inventory
    }

    #[test]
    fn test_invalid_number_reprompts() {
        let (mut shell, _dir) = shell_with("abc\n99\n0\n", Inventory::new());
        shell.run().unwrap();
        let out = output(&shell);
        assert!(out.contains("please enter a valid number"));
        assert!(out.contains("Invalid option"));
        assert!(out.contains("Goodbye."));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let (mut shell, _dir) = shell_with("1\nP-1\nPlate\n", Inventory::new());
        shell.run().unwrap();
        assert!(shell.inventory().is_empty());
    }

    #[test]
    fn test_rejected_update_reports_validation_error() {
        let (mut shell, _dir) = shell_with("3\nK-1\n-5\n0\n", stocked());
        shell.run().unwrap();
        assert!(output(&shell).contains("Error: Invalid quantity: must not be negative"));
        assert_eq!(
            shell.inventory().get(&"K-1".into()).map(|p| p.quantity()),
            Some(4)
        );
    }

    #[test]
    fn test_forbidden_id_characters() {
        let (mut shell, _dir) = shell_with("1\nK;1\n0\n", Inventory::new());
        shell.run().unwrap();
        assert!(output(&shell).contains("product IDs may not contain"));
        assert!(shell.inventory().is_empty());
    }

    #[test]
    fn test_withdraw_more_than_available() {
        let (mut shell, _dir) = shell_with("13\nK-1\n9\n0\n", stocked());
        shell.run().unwrap();
        assert!(output(&shell).contains("Insufficient stock: requested 9, available 4"));
    }

    #[test]
    fn test_failed_save_rolls_back() {
        let dir = tempfile::tempdir().unwrap();
        // a directory where the data file should be makes the final rename fail
        let target = dir.path().join("inventory.json");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), b"x").unwrap();

        let mut shell = Shell::new(
            stocked(),
            JsonStore::new(&target),
            Cursor::new(b"12\nK-1\n6\n0\n".to_vec()),
            Vec::new(),
        );
        shell.run().unwrap();

        assert!(output(&shell).contains("The change was not applied."));
        assert_eq!(
            shell.inventory().get(&"K-1".into()).map(|p| p.quantity()),
            Some(4)
        );
    }
}
