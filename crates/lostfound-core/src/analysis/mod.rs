mod summary;

pub use summary::SummaryAnalyzer;

use crate::ledger::Snapshot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Overview of a ledger's contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub total_items: usize,
    pub claimed: usize,
    pub unclaimed: usize,
    /// Unclaimed items old enough to be shown as up for auction
    pub auction_eligible: usize,
    /// Item count per category, keyed by the category as typed
    pub categories: BTreeMap<String, usize>,
    pub reporters: usize,
    pub total_points: u64,
}

pub trait Analyzer {
    type Output;

    fn analyze(&self, snapshot: &Snapshot) -> crate::Result<Self::Output>;
}
