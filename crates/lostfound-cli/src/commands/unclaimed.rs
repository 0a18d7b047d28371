use super::items::print_items;
use crate::OutputFormat;
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use lostfound_core::LedgerConfig;
use lostfound_core::ledger::ItemView;

/// Unclaimed items with their status as of `now`
pub fn list_unclaimed(config: &LedgerConfig, now: NaiveDateTime) -> Result<Vec<ItemView>> {
    let ledger = config.open()?;
    Ok(ledger.list_unclaimed(now))
}

pub fn execute(config: &LedgerConfig, format: OutputFormat) -> Result<()> {
    let items = list_unclaimed(config, Local::now().naive_local())?;
    print_items("Unclaimed Items", &items, format)
}
