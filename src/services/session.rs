//! Filter session state
//!
//! Holds the mutable draft edited in the filter sheet and the immutable
//! applied selection governing the displayed list. The draft only becomes
//! effective through [`FilterSession::apply`].

use crate::models::{DurationFilter, DurationPreset, FilterSet, SortKey};

/// The confirmed filter/sort pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppliedFilters {
    pub filters: FilterSet,
    pub sort: SortKey,
}

/// Draft filter selections, reconciled into [`AppliedFilters`] on "Accept".
#[derive(Debug, Clone, Default)]
pub struct FilterSession {
    draft: FilterSet,
    draft_sort: SortKey,
    applied: AppliedFilters,
}

impl FilterSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &FilterSet {
        &self.draft
    }

    pub fn draft_sort(&self) -> SortKey {
        self.draft_sort
    }

    pub fn applied(&self) -> &AppliedFilters {
        &self.applied
    }

    /// Add or remove one city, leaving the other facets untouched.
    pub fn toggle_city(&mut self, city: &str) {
        if !self.draft.city.shift_remove(city) {
            self.draft.city.insert(city.to_string());
        }
    }

    /// Select a rating floor; re-selecting the active value clears it.
    pub fn toggle_rating(&mut self, threshold: f64) {
        if self.draft.rating == Some(threshold) {
            self.draft.rating = None;
        } else {
            self.draft.rating = Some(threshold);
        }
    }

    /// Select a duration preset. Re-selecting the active one clears it; any
    /// in-progress custom bounds are discarded rather than merged.
    pub fn toggle_duration_preset(&mut self, preset: DurationPreset) {
        self.draft.duration = match self.draft.duration {
            Some(DurationFilter::Preset(active)) if active == preset => None,
            _ => Some(DurationFilter::Preset(preset)),
        };
    }

    /// Select a custom minute range. Re-selecting the same bounds clears it;
    /// an active preset is dropped.
    pub fn toggle_custom_duration(&mut self, min: i64, max: i64) {
        self.draft.duration = match self.draft.duration {
            Some(DurationFilter::Custom { min: m, max: x }) if m == min && x == max => None,
            _ => Some(DurationFilter::Custom { min, max }),
        };
    }

    /// Pick the sort key (radio semantics).
    pub fn set_sort(&mut self, sort: SortKey) {
        self.draft_sort = sort;
    }

    /// Confirm the draft, freezing it into the applied state.
    pub fn apply(&mut self) -> &AppliedFilters {
        self.applied = AppliedFilters {
            filters: self.draft.clone(),
            sort: self.draft_sort,
        };
        &self.applied
    }

    /// Reset draft and applied state to the empty default in one step.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
