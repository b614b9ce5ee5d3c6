//! Data models for the discovery engine

pub mod bucket;
pub mod event;
pub mod filter;
pub mod history;

// Re-export commonly used types
pub use bucket::{Bucket, BucketKind};
pub use event::{CreatorSummary, EventRecord};
pub use filter::{DurationFilter, DurationPreset, FilterSet, SortKey, RATING_THRESHOLDS};
pub use history::SearchHistory;
