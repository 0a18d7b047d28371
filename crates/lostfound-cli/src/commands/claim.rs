use crate::{OutputFormat, print_json};
use anyhow::Result;
use lostfound_core::LedgerConfig;
use lostfound_core::ledger::{Item, parse_item_id};

/// Claim the item whose id the user typed as `input`
pub fn claim_item(config: &LedgerConfig, input: &str) -> Result<Item> {
    let id = parse_item_id(input)?;
    let mut ledger = config.open()?;
    Ok(ledger.claim(id)?)
}

pub fn execute(config: &LedgerConfig, input: &str, format: OutputFormat) -> Result<()> {
    let item = claim_item(config, input)?;

    match format {
        OutputFormat::Json => print_json(&item)?,
        OutputFormat::Table => {
            println!("ID,Name,Claimed");
            println!("{},{},{}", item.id, item.name, item.claimed);
        }
        OutputFormat::Pretty => {
            use console::style;
            println!(
                "\n{} Item '{}' has been claimed successfully!\n",
                style("✓").green().bold(),
                item.name
            );
        }
    }

    Ok(())
}
