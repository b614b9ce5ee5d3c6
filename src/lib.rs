//! Dobrovol Event Discovery Engine
//!
//! The discovery core of the Dobrovol volunteering client: filtering,
//! ordering and categorization of event snapshots, free-text search with a
//! bounded persisted history, and the draft/applied filter session state.
//! Fetching, rendering and platform storage stay with the embedding shell,
//! behind the collaborator traits in [`repository`].

use std::sync::Arc;

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared with the embedding shell
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire the engine up with its external collaborators.
    pub fn new(
        config: AppConfig,
        source: Arc<dyn repository::EventSource>,
        store: Arc<dyn repository::KeyValueStore>,
    ) -> Self {
        let services = services::Services::new(source, store, &config);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}

/// Initialize tracing for the embedding shell.
///
/// Honors `RUST_LOG` when set, falling back to the configured level.
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(config: &config::LoggingConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("dobrovol_discovery={}", config.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .ok();
}
