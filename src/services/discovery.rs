//! Event discovery service

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::config::BucketConfig;
use crate::engine::{buckets, predicate, sort};
use crate::error::{AppError, AppResult};
use crate::models::{Bucket, BucketKind, EventRecord, FilterSet, SortKey};
use crate::repository::EventSource;

/// Filtering, ordering and categorization over an event snapshot.
///
/// Every view method is a pure transformation of the snapshot it is handed;
/// the only I/O is [`DiscoveryService::refresh`], which pulls a full
/// replacement snapshot from the event source.
#[derive(Clone)]
pub struct DiscoveryService {
    source: Arc<dyn EventSource>,
    buckets: BucketConfig,
}

impl DiscoveryService {
    pub fn new(source: Arc<dyn EventSource>, buckets: BucketConfig) -> Self {
        Self { source, buckets }
    }

    /// Fetch a fresh snapshot, replacing whatever the caller held before.
    pub async fn refresh(&self) -> AppResult<Vec<EventRecord>> {
        let events = self
            .source
            .fetch_events()
            .await
            .map_err(AppError::EventSource)?;
        tracing::info!("Loaded event snapshot ({} events)", events.len());
        Ok(events)
    }

    /// Upcoming events surviving the applied filters, ordered by `sort_key`.
    pub fn visible(
        &self,
        events: &[EventRecord],
        filters: &FilterSet,
        sort_key: Option<SortKey>,
        now: DateTime<Utc>,
    ) -> Vec<EventRecord> {
        let filtered: Vec<EventRecord> = events
            .iter()
            .filter(|e| predicate::is_visible(e, filters, now))
            .cloned()
            .collect();
        tracing::debug!("{} of {} events visible", filtered.len(), events.len());
        sort::sorted(&filtered, sort_key)
    }

    /// Free-text search layered on top of the applied filters.
    pub fn search(
        &self,
        events: &[EventRecord],
        filters: &FilterSet,
        query: &str,
        sort_key: Option<SortKey>,
        now: DateTime<Utc>,
    ) -> Vec<EventRecord> {
        let filtered: Vec<EventRecord> = events
            .iter()
            .filter(|e| {
                predicate::is_visible(e, filters, now) && predicate::matches_search(e, query)
            })
            .cloned()
            .collect();
        sort::sorted(&filtered, sort_key)
    }

    /// Category rows for the landing view, built from the unfiltered
    /// visible set.
    pub fn landing(&self, events: &[EventRecord], now: DateTime<Utc>) -> Vec<Bucket> {
        let visible = self.visible(events, &FilterSet::default(), None, now);
        buckets::build_buckets(&visible, &self.buckets)
    }

    /// Full contents of one category row, for the "see all" screen.
    pub fn bucket(
        &self,
        events: &[EventRecord],
        kind: BucketKind,
        sort_key: Option<SortKey>,
        now: DateTime<Utc>,
    ) -> Vec<EventRecord> {
        let visible = self.visible(events, &FilterSet::default(), None, now);
        buckets::bucket_events(&visible, kind, sort_key, &self.buckets)
    }
}
