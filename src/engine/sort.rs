//! Event ordering

use std::cmp::Ordering;

use crate::models::{EventRecord, SortKey};

/// Return a new ordering of `events` by the given key.
///
/// The underlying sort is stable, so equal keys keep their input order, and
/// a `None` key (e.g. an unrecognized name from the view layer) leaves the
/// input order untouched.
pub fn sorted(events: &[EventRecord], key: Option<SortKey>) -> Vec<EventRecord> {
    let mut out = events.to_vec();
    match key {
        Some(SortKey::Rating) => out.sort_by(|a, b| {
            let ra = a.creator_rating().unwrap_or(0.0);
            let rb = b.creator_rating().unwrap_or(0.0);
            rb.partial_cmp(&ra).unwrap_or(Ordering::Equal)
        }),
        // Soonest first; events without a usable start sort last (the
        // visibility gate removes them from any displayed set anyway).
        Some(SortKey::Date) => out.sort_by_key(|e| {
            e.start.map(|dt| dt.timestamp_millis()).unwrap_or(i64::MAX)
        }),
        Some(SortKey::Points) => out.sort_by(|a, b| b.price.cmp(&a.price)),
        None => {}
    }
    out
}
