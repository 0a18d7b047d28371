use crate::{OutputFormat, print_json};
use anyhow::Result;
use lostfound_core::LedgerConfig;
use lostfound_core::ledger::ReporterPoints;

/// Points for one reporter, or the full leaderboard
pub fn collect_points(config: &LedgerConfig, reporter: Option<&str>) -> Result<Vec<ReporterPoints>> {
    let ledger = config.open()?;

    Ok(match reporter {
        Some(name) => vec![ReporterPoints {
            reporter: name.to_string(),
            points: ledger.points(name),
        }],
        None => ledger.leaderboard(),
    })
}

pub fn execute(config: &LedgerConfig, reporter: Option<&str>, format: OutputFormat) -> Result<()> {
    let board = collect_points(config, reporter)?;

    match format {
        OutputFormat::Json => print_json(&board)?,
        OutputFormat::Table => {
            println!("Reporter,Points");
            for entry in &board {
                println!("{},{}", entry.reporter, entry.points);
            }
        }
        OutputFormat::Pretty => output_pretty(&board),
    }

    Ok(())
}

fn output_pretty(board: &[ReporterPoints]) {
    use console::style;

    println!("\n{}", style("Reporter Points").bold().cyan());
    println!("{}", style("===============").cyan());

    if board.is_empty() {
        println!("\n  No reports yet.\n");
        return;
    }

    let width = board
        .iter()
        .map(|entry| entry.reporter.chars().count())
        .max()
        .unwrap_or(0);

    println!();
    for (rank, entry) in board.iter().enumerate() {
        println!(
            "  {:>2}. {:<width$}  {} points",
            rank + 1,
            entry.reporter,
            entry.points,
            width = width
        );
    }
    println!();
}
