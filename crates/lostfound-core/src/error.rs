use crate::ledger::ItemId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to access ledger file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse ledger file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to serialize ledger snapshot: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Invalid ledger structure: {0}")]
    InvalidStructure(String),

    #[error("Please fill in all fields ({0} is empty)")]
    Validation(String),

    #[error("Item not found: {0}")]
    NotFound(ItemId),

    #[error("Item {0} has already been claimed")]
    AlreadyClaimed(ItemId),

    #[error("Please enter a valid item ID (number), got '{0}'")]
    InvalidId(String),

    #[error("Invalid search field '{0}' (expected name, category or location)")]
    InvalidSearchField(String),
}

pub type Result<T> = std::result::Result<T, Error>;
