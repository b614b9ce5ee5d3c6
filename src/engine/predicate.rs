//! Visibility and search predicates

use chrono::{DateTime, Utc};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::models::{EventRecord, FilterSet};

/// Whether an event survives the applied filter set at evaluation time.
///
/// Past events, and events whose timestamps could not be parsed, never pass
/// regardless of the other facets. Each facet short-circuits.
pub fn is_visible(event: &EventRecord, filters: &FilterSet, now: DateTime<Utc>) -> bool {
    let start = match event.start {
        Some(start) => start,
        None => return false,
    };
    if event.end.is_none() || start <= now {
        return false;
    }

    if !filters.city.is_empty() && !filters.city.contains(event.city.as_str()) {
        return false;
    }

    if let Some(threshold) = filters.rating {
        // An unrated creator is "rating unknown", not a failure.
        if let Some(rating) = event.creator_rating() {
            if rating < threshold {
                return false;
            }
        }
    }

    if let Some(duration) = filters.duration {
        match event.duration_minutes() {
            Some(minutes) if duration.admits(minutes) => {}
            _ => return false,
        }
    }

    true
}

/// Whether an event matches a free-text query.
///
/// Case- and diacritic-insensitive substring test over the event name, city
/// and address. A blank query matches everything.
pub fn matches_search(event: &EventRecord, query: &str) -> bool {
    let needle = fold(query.trim());
    if needle.is_empty() {
        return true;
    }
    fold(&event.name).contains(&needle)
        || fold(&event.city).contains(&needle)
        || fold(&event.address).contains(&needle)
}

/// Lowercase and strip diacritics, so "úklid Řeky" matches "uklid reky".
fn fold(text: &str) -> String {
    text.to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
