use crate::Result;
use crate::ledger::{JsonFileStore, Ledger};
use std::path::{Path, PathBuf};

/// File the ledger lives in when nothing else is configured
pub const DEFAULT_DATA_FILE: &str = "lost_and_found.json";

/// Points credited to a reporter for every accepted report
pub const DEFAULT_REWARD_POINTS: u64 = 10;

/// Unclaimed items older than this are shown with the auction status
pub const DEFAULT_AUCTION_AFTER_DAYS: i64 = 30;

/// How reporter names are turned into point tally keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReporterIdentity {
    /// The name exactly as typed ("Alice" and "alice " are two reporters)
    #[default]
    Exact,
    /// Trimmed and lowercased
    Normalized,
}

impl ReporterIdentity {
    /// Tally key for a reporter name
    pub fn key(&self, reporter: &str) -> String {
        match self {
            ReporterIdentity::Exact => reporter.to_string(),
            ReporterIdentity::Normalized => reporter.trim().to_lowercase(),
        }
    }
}

/// Settings for opening and operating a ledger
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    pub data_file: PathBuf,
    pub reward_points: u64,
    pub auction_after_days: i64,
    pub reporter_identity: ReporterIdentity,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            reward_points: DEFAULT_REWARD_POINTS,
            auction_after_days: DEFAULT_AUCTION_AFTER_DAYS,
            reporter_identity: ReporterIdentity::default(),
        }
    }
}

impl LedgerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the ledger in a different file
    pub fn with_data_file(mut self, path: impl AsRef<Path>) -> Self {
        self.data_file = path.as_ref().to_path_buf();
        self
    }

    pub fn with_reporter_identity(mut self, identity: ReporterIdentity) -> Self {
        self.reporter_identity = identity;
        self
    }

    /// Open the ledger backed by `data_file`, creating the file if it is missing
    pub fn open(&self) -> Result<Ledger<JsonFileStore>> {
        tracing::debug!("Opening ledger at: {}", self.data_file.display());
        Ledger::open(JsonFileStore::new(&self.data_file), self)
    }
}
