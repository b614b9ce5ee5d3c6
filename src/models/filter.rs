//! Filter and sort selections applied to the event list

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Rating thresholds offered by the filter sheet ("From 3", "From 4.2", "From 5").
pub const RATING_THRESHOLDS: [f64; 3] = [3.0, 4.2, 5.0];

/// Named duration presets; mutually exclusive with each other and with a
/// custom range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationPreset {
    Less2h,
    More3h,
    More30min,
}

/// Active duration restriction; the enum guarantees at most one mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationFilter {
    Preset(DurationPreset),
    /// Inclusive bounds, in minutes.
    Custom { min: i64, max: i64 },
}

impl DurationFilter {
    /// Whether an event of the given length satisfies this restriction.
    pub fn admits(&self, duration_minutes: i64) -> bool {
        match *self {
            DurationFilter::Preset(DurationPreset::Less2h) => duration_minutes < 120,
            DurationFilter::Preset(DurationPreset::More3h) => duration_minutes > 180,
            DurationFilter::Preset(DurationPreset::More30min) => duration_minutes > 30,
            DurationFilter::Custom { min, max } => {
                duration_minutes >= min && duration_minutes <= max
            }
        }
    }
}

/// Confirmed filter selection governing the displayed list.
///
/// Immutable once applied; edits go through the draft in
/// [`crate::services::session::FilterSession`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterSet {
    /// Selected cities; empty means no city restriction.
    #[serde(default)]
    pub city: IndexSet<String>,
    /// Minimum creator rating, inclusive.
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub duration: Option<DurationFilter>,
}

impl FilterSet {
    pub fn is_empty(&self) -> bool {
        self.city.is_empty() && self.rating.is_none() && self.duration.is_none()
    }
}

/// Sort key for the event list; exactly one active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Rating,
    #[default]
    Date,
    Points,
}

impl SortKey {
    /// Parse a key name coming from the view layer. Unknown names map to
    /// `None`, which the sorter treats as "keep input order".
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "rating" => Some(SortKey::Rating),
            "date" => Some(SortKey::Date),
            "points" => Some(SortKey::Points),
            _ => None,
        }
    }
}
