use crate::{OutputFormat, print_json};
use anyhow::Result;
use lostfound_core::LedgerConfig;
use lostfound_core::ledger::{ReportOutcome, ReportRequest};

/// Record a found item in the ledger described by `config`.
/// The request is checked before the ledger file is touched.
pub fn report_item(config: &LedgerConfig, request: ReportRequest) -> Result<ReportOutcome> {
    request.validate()?;
    let mut ledger = config.open()?;
    Ok(ledger.report(request)?)
}

pub fn execute(config: &LedgerConfig, request: ReportRequest, format: OutputFormat) -> Result<()> {
    let outcome = report_item(config, request)?;

    match format {
        OutputFormat::Json => print_json(&outcome)?,
        OutputFormat::Table => {
            println!("Field,Value");
            println!("ID,{}", outcome.item.id);
            println!("Date Found,{}", outcome.item.date_found.format("%Y-%m-%d"));
            println!("Points Awarded,{}", outcome.points_awarded);
            println!("Total Points,{}", outcome.total_points);
        }
        OutputFormat::Pretty => output_pretty(&outcome),
    }

    Ok(())
}

fn output_pretty(outcome: &ReportOutcome) {
    use console::style;

    println!(
        "\n{} {}",
        style("Item reported successfully!").bold().green(),
        style(format!("(ID {})", outcome.item.id)).dim()
    );
    println!("  {} found at {}", outcome.item.name, outcome.item.location);
    println!("  You earned {} points!", outcome.points_awarded);
    println!(
        "  Total points for {}: {}",
        outcome.item.reporter,
        style(outcome.total_points).bold()
    );
    println!();
}
