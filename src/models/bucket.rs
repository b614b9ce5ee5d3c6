//! Landing-view category rows

use serde::{Deserialize, Serialize};

use super::event::EventRecord;

/// Identity of a landing-view category row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketKind {
    GoodReviews,
    Nearby,
    ManyPoints,
    All,
}

impl BucketKind {
    /// Display label for the category header.
    pub fn label(&self) -> &'static str {
        match self {
            BucketKind::GoodReviews => "With good reviews",
            BucketKind::Nearby => "Closest to you",
            BucketKind::ManyPoints => "Many points",
            BucketKind::All => "All events",
        }
    }
}

impl std::fmt::Display for BucketKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One displayed category row: a capped preview plus the total qualifying
/// count backing the "see all" affordance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bucket {
    pub kind: BucketKind,
    /// Preview slice, at most `preview_len` events.
    pub events: Vec<EventRecord>,
    /// Qualifying events in total.
    pub total: usize,
}
