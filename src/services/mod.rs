//! Business logic services

pub mod discovery;
pub mod history;
pub mod session;

use std::sync::Arc;

use crate::config::AppConfig;
use crate::repository::{EventSource, KeyValueStore};

pub use discovery::DiscoveryService;
pub use history::SearchHistoryService;
pub use session::{AppliedFilters, FilterSession};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub discovery: DiscoveryService,
    pub history: SearchHistoryService,
}

impl Services {
    /// Create all services over the given collaborators
    pub fn new(
        source: Arc<dyn EventSource>,
        store: Arc<dyn KeyValueStore>,
        config: &AppConfig,
    ) -> Self {
        Self {
            discovery: DiscoveryService::new(source, config.buckets.clone()),
            history: SearchHistoryService::new(store, config.history.clone()),
        }
    }
}
