use super::{Analyzer, LedgerSummary};
use crate::Result;
use crate::config::DEFAULT_AUCTION_AFTER_DAYS;
use crate::ledger::{ItemStatus, Snapshot};
use chrono::{Duration, NaiveDateTime};
use std::collections::BTreeMap;

pub struct SummaryAnalyzer {
    now: NaiveDateTime,
    auction_after: Duration,
}

impl SummaryAnalyzer {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now,
            auction_after: Duration::days(DEFAULT_AUCTION_AFTER_DAYS),
        }
    }

    pub fn with_auction_after(mut self, auction_after: Duration) -> Self {
        self.auction_after = auction_after;
        self
    }
}

impl Analyzer for SummaryAnalyzer {
    type Output = LedgerSummary;

    fn analyze(&self, snapshot: &Snapshot) -> Result<Self::Output> {
        tracing::debug!("Analyzing ledger summary");

        let items = &snapshot.items;
        let claimed = items.iter().filter(|item| item.claimed).count();

        let auction_eligible = items
            .iter()
            .filter(|item| !item.claimed)
            .filter(|item| {
                item.unclaimed_status(self.now, self.auction_after) == ItemStatus::Auction
            })
            .count();

        let mut categories = BTreeMap::new();
        for item in items {
            *categories.entry(item.category.clone()).or_insert(0) += 1;
        }

        let total_points: u64 = snapshot.user_points.values().sum();

        Ok(LedgerSummary {
            total_items: items.len(),
            claimed,
            unclaimed: items.len() - claimed,
            auction_eligible,
            categories,
            reporters: snapshot.user_points.len(),
            total_points,
        })
    }
}
