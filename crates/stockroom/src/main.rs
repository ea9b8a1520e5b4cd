use anyhow::Context;
use clap::Parser;
use stock_store::tracing::setup_tracing;
use stockroom::settings::{Command, Settings};
use stockroom::shell::{render, Shell};
use stockroom::storage::JsonStore;
use std::io;
use tracing::info;

fn main() -> anyhow::Result<()> {
    let settings = Settings::parse();

    // Logs go to stderr so they never interleave with menu output
    setup_tracing("warn");

    let store = JsonStore::new(&settings.data_file);
    let inventory = store
        .load()
        .with_context(|| format!("could not load inventory from {}", settings.data_file.display()))?
        .with_low_stock_threshold(settings.low_stock_threshold);
    info!(products = inventory.len(), "Inventory ready");

    match settings.command() {
        Command::Shell => {
            let stdin = io::stdin();
            Shell::new(inventory, store, stdin.lock(), io::stdout())
                .with_max_input_length(settings.max_input_length)
                .run()
                .context("terminal I/O failed")?;
        }
        command => {
            let mut stdout = io::stdout().lock();
            render::run_command(&command, &inventory, &mut stdout).context("could not write output")?;
        }
    }
    Ok(())
}
