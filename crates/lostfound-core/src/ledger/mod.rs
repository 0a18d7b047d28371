//! The item ledger: every found item, the id counter and the reporter
//! point tally, persisted as one snapshot after each change.

mod reader;
mod store;
mod types;
mod writer;

pub use reader::SnapshotReader;
pub use store::{JsonFileStore, MemoryStore, SnapshotStore};
pub use types::*;
pub use writer::SnapshotWriter;

use crate::analysis::{Analyzer, LedgerSummary, SummaryAnalyzer};
use crate::config::{LedgerConfig, ReporterIdentity};
use crate::search::{SearchCriteria, SearchField, search_items};
use crate::{Error, Result};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

pub struct Ledger<S: SnapshotStore> {
    store: S,
    snapshot: Snapshot,
    reward_points: u64,
    auction_after: Duration,
    reporter_identity: ReporterIdentity,
}

impl<S: SnapshotStore> Ledger<S> {
    /// Load the ledger from `store`. An empty ledger is created and saved
    /// right away when the store holds nothing yet.
    pub fn open(mut store: S, config: &LedgerConfig) -> Result<Self> {
        let snapshot = match store.load()? {
            Some(snapshot) => snapshot,
            None => {
                tracing::info!("No existing ledger found, starting an empty one");
                let snapshot = Snapshot::default();
                store.save(&snapshot)?;
                snapshot
            }
        };

        tracing::debug!(
            "Ledger opened with {} items, next id {}",
            snapshot.items.len(),
            snapshot.next_id
        );

        Ok(Self {
            store,
            snapshot,
            reward_points: config.reward_points,
            auction_after: Duration::days(config.auction_after_days),
            reporter_identity: config.reporter_identity,
        })
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn items(&self) -> &[Item] {
        &self.snapshot.items
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn auction_after(&self) -> Duration {
        self.auction_after
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.snapshot.items.iter().find(|item| item.id == id)
    }

    /// Record a found item dated today and credit the reporter
    pub fn report(&mut self, request: ReportRequest) -> Result<ReportOutcome> {
        self.report_on(request, Local::now().date_naive())
    }

    /// Record a found item with an explicit find date
    pub fn report_on(
        &mut self,
        request: ReportRequest,
        date_found: NaiveDate,
    ) -> Result<ReportOutcome> {
        request.validate()?;

        let mut next = self.snapshot.clone();
        let item = Item {
            id: next.next_id,
            name: request.name,
            category: request.category,
            location: request.location,
            date_found,
            claimed: false,
            reporter: request.reporter,
        };
        next.next_id = next.next_id.checked_add(1).ok_or_else(|| {
            Error::InvalidStructure("Item id counter is exhausted".to_string())
        })?;
        next.items.push(item.clone());

        let key = self.reporter_identity.key(&item.reporter);
        let points = next.user_points.entry(key).or_insert(0);
        *points = points.checked_add(self.reward_points).ok_or_else(|| {
            Error::InvalidStructure(format!("Point tally for {} overflowed", item.reporter))
        })?;
        let total_points = *points;

        self.commit(next)?;

        tracing::info!(
            "Reported item {} '{}' by {} ({} points total)",
            item.id,
            item.name,
            item.reporter,
            total_points
        );

        Ok(ReportOutcome {
            item,
            points_awarded: self.reward_points,
            total_points,
        })
    }

    /// Items whose `field` contains `term`, ignoring case
    pub fn search(&self, field: SearchField, term: &str) -> Vec<&Item> {
        search_items(&self.snapshot.items, &SearchCriteria::new(field, term))
    }

    /// Unclaimed items with their available/auction status as of `now`
    pub fn list_unclaimed(&self, now: NaiveDateTime) -> Vec<ItemView> {
        self.snapshot
            .items
            .iter()
            .filter(|item| !item.claimed)
            .map(|item| ItemView {
                item: item.clone(),
                status: item.unclaimed_status(now, self.auction_after),
            })
            .collect()
    }

    /// Mark an item as returned to its owner
    pub fn claim(&mut self, id: ItemId) -> Result<Item> {
        let idx = self
            .snapshot
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(Error::NotFound(id))?;

        if self.snapshot.items[idx].claimed {
            return Err(Error::AlreadyClaimed(id));
        }

        let mut next = self.snapshot.clone();
        next.items[idx].claimed = true;
        let item = next.items[idx].clone();

        self.commit(next)?;

        tracing::info!("Item {} '{}' claimed", item.id, item.name);
        Ok(item)
    }

    /// Points earned by `reporter`, zero if they never reported anything
    pub fn points(&self, reporter: &str) -> u64 {
        let key = self.reporter_identity.key(reporter);
        self.snapshot.user_points.get(&key).copied().unwrap_or(0)
    }

    /// All reporters, most points first
    pub fn leaderboard(&self) -> Vec<ReporterPoints> {
        let mut board: Vec<ReporterPoints> = self
            .snapshot
            .user_points
            .iter()
            .map(|(reporter, points)| ReporterPoints {
                reporter: reporter.clone(),
                points: *points,
            })
            .collect();

        board.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then_with(|| a.reporter.cmp(&b.reporter))
        });
        board
    }

    pub fn summary(&self, now: NaiveDateTime) -> Result<LedgerSummary> {
        SummaryAnalyzer::new(now)
            .with_auction_after(self.auction_after)
            .analyze(&self.snapshot)
    }

    /// Persist `next` and only then make it the current state
    fn commit(&mut self, next: Snapshot) -> Result<()> {
        self.store.save(&next)?;
        self.snapshot = next;
        Ok(())
    }
}
