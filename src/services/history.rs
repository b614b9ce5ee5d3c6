//! Search history service

use std::sync::Arc;

use crate::config::HistoryConfig;
use crate::error::{AppError, AppResult};
use crate::models::SearchHistory;
use crate::repository::KeyValueStore;

/// Manages the persisted "recent searches" log.
///
/// Persistence is best-effort: a failing or corrupt store degrades to an
/// in-session history and never surfaces an error to the search flow.
#[derive(Clone)]
pub struct SearchHistoryService {
    store: Arc<dyn KeyValueStore>,
    config: HistoryConfig,
}

impl SearchHistoryService {
    pub fn new(store: Arc<dyn KeyValueStore>, config: HistoryConfig) -> Self {
        Self { store, config }
    }

    /// Load the persisted history, degrading to empty on any failure.
    pub async fn load(&self) -> SearchHistory {
        match self.store.get(&self.config.storage_key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(history) => history,
                Err(err) => {
                    tracing::warn!("Discarding corrupt search history: {}", err);
                    SearchHistory::new()
                }
            },
            Ok(None) => SearchHistory::new(),
            Err(err) => {
                tracing::warn!("Failed to load search history: {}", err);
                SearchHistory::new()
            }
        }
    }

    /// Record a submitted query, returning the updated log immediately.
    ///
    /// The write happens on a detached task; the search flow never waits on
    /// it and never sees a persistence error.
    pub fn record(&self, mut history: SearchHistory, query: &str) -> SearchHistory {
        if !history.record(query, self.config.max_entries) {
            return history;
        }
        self.persist_detached(history.clone());
        history
    }

    /// Empty the log and persist the empty state.
    pub fn clear(&self, history: &mut SearchHistory) {
        history.clear();
        self.persist_detached(history.clone());
    }

    /// Recent searches to pre-populate the search field. Offered only while
    /// the live query is empty; suggestions never sit beside real results.
    pub fn suggestions<'a>(&self, history: &'a SearchHistory, current_query: &str) -> &'a [String] {
        if current_query.trim().is_empty() {
            history.entries()
        } else {
            &[]
        }
    }

    /// Await the write instead of detaching. Used where the caller owns an
    /// explicit save point, e.g. when the shell is backgrounded.
    pub async fn persist(&self, history: &SearchHistory) -> AppResult<()> {
        persist(self.store.as_ref(), &self.config.storage_key, history).await
    }

    fn persist_detached(&self, history: SearchHistory) {
        let store = Arc::clone(&self.store);
        let key = self.config.storage_key.clone();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(err) = persist(store.as_ref(), &key, &history).await {
                        tracing::warn!("Failed to persist search history: {}", err);
                    }
                });
            }
            Err(_) => tracing::warn!("No async runtime; search history kept in memory only"),
        }
    }
}

async fn persist(store: &dyn KeyValueStore, key: &str, history: &SearchHistory) -> AppResult<()> {
    let payload = serde_json::to_string(history)?;
    store.set(key, &payload).await.map_err(AppError::Storage)
}
