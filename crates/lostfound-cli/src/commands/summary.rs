use crate::{OutputFormat, print_json};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use lostfound_core::LedgerConfig;
use lostfound_core::analysis::LedgerSummary;

/// Summarize the ledger as of `now`
pub fn summarize(config: &LedgerConfig, now: NaiveDateTime) -> Result<LedgerSummary> {
    let ledger = config.open()?;
    Ok(ledger.summary(now)?)
}

pub fn execute(config: &LedgerConfig, format: OutputFormat) -> Result<()> {
    let summary = summarize(config, Local::now().naive_local())?;

    match format {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Table => output_table(&summary),
        OutputFormat::Pretty => output_pretty(&summary),
    }

    Ok(())
}

fn output_pretty(summary: &LedgerSummary) {
    use console::style;

    println!("\n{}", style("Lost and Found Summary").bold().cyan());
    println!("{}", style("======================").cyan());

    println!("\n{}", style("Items:").bold());
    println!("  Total:            {}", summary.total_items);
    println!("  Claimed:          {}", summary.claimed);
    println!("  Unclaimed:        {}", summary.unclaimed);
    println!("  Auction Eligible: {}", summary.auction_eligible);

    if !summary.categories.is_empty() {
        println!("\n{}", style("Categories:").bold());
        for (category, count) in &summary.categories {
            println!("  {:<16}  {}", category, count);
        }
    }

    println!("\n{}", style("Reporters:").bold());
    println!("  Reporters:        {}", summary.reporters);
    println!("  Points Awarded:   {}", summary.total_points);

    println!(); // trailing newline
}

fn output_table(summary: &LedgerSummary) {
    println!("Metric,Value");
    println!("Total Items,{}", summary.total_items);
    println!("Claimed,{}", summary.claimed);
    println!("Unclaimed,{}", summary.unclaimed);
    println!("Auction Eligible,{}", summary.auction_eligible);
    println!("Reporters,{}", summary.reporters);
    println!("Points Awarded,{}", summary.total_points);
}
