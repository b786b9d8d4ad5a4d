// Work Order Board
// Main entry point: prints the configured board view to the terminal

use anyhow::{anyhow, Result};

use work_order_board::services::render::{render_board, render_conflicts};
use work_order_board::services::settings::{default_data_file, load_config};
use work_order_board::services::storage::JsonFileStore;
use work_order_board::services::timeline::TimelineService;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Work Order Board");

    let config = load_config()?;
    config
        .validate()
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;

    let data_file = config.data_file.clone().unwrap_or_else(default_data_file);
    let store = JsonFileStore::open(data_file)?;
    log::info!("Using board data at {}", store.path().display());

    let mut service = TimelineService::new(store)?;
    service.set_mode(config.default_view);
    if let Some(anchor) = config.anchor_date {
        service.set_current_date(anchor);
    }
    if let Some(search) = &config.search {
        service.set_search_term(search.as_str());
    }

    let snapshot = service.snapshot();
    print!("{}", render_board(&snapshot, config.chars_per_column));
    println!();
    print!("{}", render_conflicts(&snapshot));

    Ok(())
}
