use crate::ledger::Item;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Item field a search looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Name,
    Category,
    Location,
}

impl SearchField {
    /// Value of this field on `item`
    pub fn value<'a>(&self, item: &'a Item) -> &'a str {
        match self {
            SearchField::Name => &item.name,
            SearchField::Category => &item.category,
            SearchField::Location => &item.location,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::Name => "name",
            SearchField::Category => "category",
            SearchField::Location => "location",
        }
    }
}

impl FromStr for SearchField {
    type Err = Error;

    /// Accepts "name", "category" or "location" in any case
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Ok(SearchField::Name),
            "category" => Ok(SearchField::Category),
            "location" => Ok(SearchField::Location),
            _ => Err(Error::InvalidSearchField(s.to_string())),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive substring match on one field
#[derive(Debug, Clone)]
pub struct SearchCriteria {
    pub field: SearchField,
    /// Lowercased search term
    pub term: String,
}

impl SearchCriteria {
    pub fn new(field: SearchField, term: &str) -> Self {
        Self {
            field,
            term: term.to_lowercase(),
        }
    }

    /// Check if an item's field contains the term. An empty term matches
    /// everything.
    pub fn matches(&self, item: &Item) -> bool {
        self.field.value(item).to_lowercase().contains(&self.term)
    }
}

/// Items matching `criteria`, in ledger order
pub fn search_items<'a>(items: &'a [Item], criteria: &SearchCriteria) -> Vec<&'a Item> {
    let hits: Vec<&Item> = items.iter().filter(|item| criteria.matches(item)).collect();

    tracing::debug!(
        "Search on {} for '{}' matched {} of {} items",
        criteria.field,
        criteria.term,
        hits.len(),
        items.len()
    );

    hits
}
