use super::items::print_items;
use crate::OutputFormat;
use anyhow::Result;
use lostfound_core::LedgerConfig;
use lostfound_core::ledger::ItemView;
use lostfound_core::search::SearchField;

/// Search the ledger, pairing each hit with its available/claimed status
pub fn search_items(config: &LedgerConfig, by: &str, term: &str) -> Result<Vec<ItemView>> {
    let field: SearchField = by.parse()?;
    let ledger = config.open()?;

    Ok(ledger
        .search(field, term)
        .into_iter()
        .map(|item| ItemView {
            item: item.clone(),
            status: item.search_status(),
        })
        .collect())
}

pub fn execute(config: &LedgerConfig, by: &str, term: &str, format: OutputFormat) -> Result<()> {
    tracing::debug!("Searching by {} for '{}'", by, term);

    let hits = search_items(config, by, term)?;
    print_items("Search Results", &hits, format)
}
