pub mod claim;
pub mod completion;
pub mod items;
pub mod points;
pub mod report;
pub mod search;
pub mod summary;
pub mod unclaimed;
