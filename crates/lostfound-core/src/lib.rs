pub mod analysis;
pub mod config;
pub mod error;
pub mod ledger;
pub mod search;

pub use config::{LedgerConfig, ReporterIdentity};
pub use error::{Error, Result};
pub use ledger::Ledger;
