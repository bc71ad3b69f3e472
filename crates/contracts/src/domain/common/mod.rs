//! Common types and traits for all listed records

pub mod listed_record;
pub mod paged_filter;

// Re-exports
pub use listed_record::ListedRecord;
pub use paged_filter::{PagedFilter, PendingState};
