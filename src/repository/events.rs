//! Event source collaborator

use async_trait::async_trait;

use crate::models::EventRecord;

/// External supplier of the event list.
///
/// Every call returns a full replacement snapshot; the engine never merges
/// deltas, and a new fetch invalidates the previous snapshot wholesale.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn fetch_events(&self) -> anyhow::Result<Vec<EventRecord>>;
}
