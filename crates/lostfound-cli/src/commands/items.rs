//! Rendering of item listings shared by `search` and `unclaimed`.

use crate::{OutputFormat, to_json};
use anyhow::Result;
use lostfound_core::ledger::{ItemStatus, ItemView};

const HEADERS: [&str; 6] = ["ID", "Name", "Category", "Location", "Date Found", "Status"];

pub fn print_items(title: &str, views: &[ItemView], format: OutputFormat) -> Result<()> {
    tracing::debug!("Rendering {} items as {}", views.len(), format);

    let output = match format {
        OutputFormat::Json => to_json(views)?,
        OutputFormat::Table => format_table(views),
        OutputFormat::Pretty => format_pretty(title, views),
    };
    print!("{}", output);

    Ok(())
}

fn row(view: &ItemView) -> [String; 6] {
    [
        view.item.id.to_string(),
        view.item.name.clone(),
        view.item.category.clone(),
        view.item.location.clone(),
        view.item.date_found.format("%Y-%m-%d").to_string(),
        view.status.to_string(),
    ]
}

fn format_pretty(title: &str, views: &[ItemView]) -> String {
    use console::style;

    let mut output = String::new();
    output.push_str(&format!("\n{}\n", style(title).bold().cyan()));
    output.push_str(&format!("{}\n", style("=".repeat(title.len())).cyan()));

    if views.is_empty() {
        output.push_str("\n  No items found.\n\n");
        return output;
    }

    let rows: Vec<[String; 6]> = views.iter().map(row).collect();
    let mut widths = HEADERS.map(str::len);
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    output.push('\n');
    let header: Vec<String> = HEADERS
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| format!("{:<w$}", h, w = *w))
        .collect();
    output.push_str(&format!("  {}\n", style(header.join("  ").trim_end()).bold()));

    for (view, cells) in views.iter().zip(rows.iter()) {
        let line: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(c, w)| format!("{:<w$}", c, w = *w))
            .collect();
        let line = line.join("  ");
        let line = line.trim_end();
        match view.status {
            ItemStatus::Auction => output.push_str(&format!("  {}\n", style(line).yellow())),
            ItemStatus::Claimed => output.push_str(&format!("  {}\n", style(line).dim())),
            ItemStatus::Available => output.push_str(&format!("  {}\n", line)),
        }
    }

    output.push('\n');
    output
}

fn format_table(views: &[ItemView]) -> String {
    let mut output = String::new();
    output.push_str(&format!("{}\n", HEADERS.join(",")));
    for view in views {
        let cells = row(view).map(|cell| csv_field(&cell));
        output.push_str(&format!("{}\n", cells.join(",")));
    }
    output
}

/// Quote a CSV field when it contains a separator or quote
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use lostfound_core::ledger::Item;

    fn view(name: &str, status: ItemStatus) -> ItemView {
        ItemView {
            item: Item {
                id: 3,
                name: name.to_string(),
                category: "Electronics".to_string(),
                location: "Lab".to_string(),
                date_found: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
                claimed: status == ItemStatus::Claimed,
                reporter: "Dana".to_string(),
            },
            status,
        }
    }

    #[test]
    fn test_table_quotes_commas() {
        let output = format_table(&[view("Charger, USB-C", ItemStatus::Available)]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "ID,Name,Category,Location,Date Found,Status");
        assert_eq!(
            lines[1],
            "3,\"Charger, USB-C\",Electronics,Lab,2024-06-01,available"
        );
    }

    #[test]
    fn test_json_flattens_item_fields() {
        let output = to_json(&[view("Laptop", ItemStatus::Auction)]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value[0]["id"], 3);
        assert_eq!(value[0]["name"], "Laptop");
        assert_eq!(value[0]["status"], "auction");
    }

    #[test]
    fn test_pretty_empty_listing() {
        let output = format_pretty("Unclaimed Items", &[]);
        assert!(output.contains("No items found."));
    }
}
