use crate::{Error, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier the ledger hands out to each reported item
pub type ItemId = u64;

/// Parse an item id typed by a user
pub fn parse_item_id(input: &str) -> Result<ItemId> {
    input
        .trim()
        .parse::<ItemId>()
        .map_err(|_| Error::InvalidId(input.to_string()))
}

/// A found object awaiting its owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: String,
    pub location: String,
    pub date_found: NaiveDate,
    pub claimed: bool,
    pub reporter: String,
}

impl Item {
    /// Status shown next to a search hit
    pub fn search_status(&self) -> ItemStatus {
        if self.claimed {
            ItemStatus::Claimed
        } else {
            ItemStatus::Available
        }
    }

    /// Status shown in the unclaimed listing. The item counts as up for
    /// auction once more than `threshold` has passed since midnight of the
    /// day it was found.
    pub fn unclaimed_status(&self, now: NaiveDateTime, threshold: Duration) -> ItemStatus {
        let found_at = self.date_found.and_time(NaiveTime::MIN);
        if now - found_at > threshold {
            ItemStatus::Auction
        } else {
            ItemStatus::Available
        }
    }
}

/// Display status derived from an item, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Available,
    Auction,
    Claimed,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Available => "available",
            ItemStatus::Auction => "auction",
            ItemStatus::Claimed => "claimed",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An item paired with its derived status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    #[serde(flatten)]
    pub item: Item,
    pub status: ItemStatus,
}

/// The durable state of a ledger, read and written as one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub items: Vec<Item>,
    pub next_id: ItemId,
    pub user_points: BTreeMap<String, u64>,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            user_points: BTreeMap::new(),
        }
    }
}

/// Fields a user supplies when reporting a found item
#[derive(Debug, Clone, Default)]
pub struct ReportRequest {
    pub name: String,
    pub category: String,
    pub location: String,
    pub reporter: String,
}

impl ReportRequest {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        location: impl Into<String>,
        reporter: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            location: location.into(),
            reporter: reporter.into(),
        }
    }

    /// Every field must be non-empty. Content is otherwise kept as typed.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("name", &self.name),
            ("category", &self.category),
            ("location", &self.location),
            ("reporter", &self.reporter),
        ];

        for (field, value) in fields {
            if value.is_empty() {
                return Err(Error::Validation(field.to_string()));
            }
        }

        Ok(())
    }
}

/// Result of a successful report
#[derive(Debug, Clone, Serialize)]
pub struct ReportOutcome {
    pub item: Item,
    pub points_awarded: u64,
    pub total_points: u64,
}

/// One row of the points leaderboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReporterPoints {
    pub reporter: String,
    pub points: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_found_on(date: NaiveDate) -> Item {
        Item {
            id: 1,
            name: "Umbrella".to_string(),
            category: "Other".to_string(),
            location: "Library".to_string(),
            date_found: date,
            claimed: false,
            reporter: "Alice".to_string(),
        }
    }

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_item_id() {
        assert_eq!(parse_item_id("42").unwrap(), 42);
        assert_eq!(parse_item_id(" 7 ").unwrap(), 7);
        assert!(matches!(parse_item_id("abc"), Err(Error::InvalidId(_))));
        assert!(matches!(parse_item_id(""), Err(Error::InvalidId(_))));
        assert!(matches!(parse_item_id("-1"), Err(Error::InvalidId(_))));
    }

    #[test]
    fn test_unclaimed_status_thresholds() {
        let now = noon(2024, 3, 31);
        let threshold = Duration::days(30);

        let old = item_found_on(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()); // 31 days
        let recent = item_found_on(NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()); // 29 days

        assert_eq!(old.unclaimed_status(now, threshold), ItemStatus::Auction);
        assert_eq!(recent.unclaimed_status(now, threshold), ItemStatus::Available);
    }

    #[test]
    fn test_thirty_days_counts_from_midnight() {
        let threshold = Duration::days(30);
        let item = item_found_on(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());

        let midnight = NaiveDate::from_ymd_opt(2024, 3, 31)
            .unwrap()
            .and_time(NaiveTime::MIN);
        assert_eq!(item.unclaimed_status(midnight, threshold), ItemStatus::Available);
        assert_eq!(
            item.unclaimed_status(noon(2024, 3, 31), threshold),
            ItemStatus::Auction
        );
    }

    #[test]
    fn test_search_status() {
        let mut item = item_found_on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(item.search_status(), ItemStatus::Available);
        item.claimed = true;
        assert_eq!(item.search_status(), ItemStatus::Claimed);
    }

    #[test]
    fn test_validate_rejects_empty_fields() {
        let request = ReportRequest::new("Phone", "Electronics", "", "Bob");
        match request.validate() {
            Err(Error::Validation(field)) => assert_eq!(field, "location"),
            other => panic!("expected validation error, got {:?}", other),
        }

        assert!(ReportRequest::new("Phone", "Electronics", "Gym", "Bob")
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_accepts_whitespace_only_fields() {
        assert!(ReportRequest::new("Phone", "  ", "Gym", " ").validate().is_ok());
    }

    #[test]
    fn test_snapshot_uses_original_document_layout() {
        let json = serde_json::to_value(Snapshot::default()).unwrap();
        assert_eq!(json["next_id"], 1);
        assert!(json["items"].as_array().unwrap().is_empty());
        assert!(json["user_points"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_item_date_serializes_as_calendar_date() {
        let item = item_found_on(NaiveDate::from_ymd_opt(2024, 5, 17).unwrap());
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["date_found"], "2024-05-17");
    }
}
