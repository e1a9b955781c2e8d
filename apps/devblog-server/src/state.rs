//! Application state - shared across all handlers.

use std::sync::Arc;

use devblog_core::ports::PostRepository;
use devblog_infra::{InMemoryPostStore, new_store_with_samples};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub recent_posts_limit: usize,
}

impl AppState {
    /// Build the application state from configuration.
    pub fn new(config: &AppConfig) -> Self {
        let posts: Arc<dyn PostRepository> = if config.seed_sample_posts {
            tracing::info!("Seeding store with sample posts");
            Arc::new(new_store_with_samples())
        } else {
            tracing::info!("Starting with an empty post store");
            Arc::new(InMemoryPostStore::new())
        };

        tracing::info!("Application state initialized");

        Self::with_repository(posts, config.recent_posts_limit)
    }

    pub fn with_repository(posts: Arc<dyn PostRepository>, recent_posts_limit: usize) -> Self {
        Self {
            posts,
            recent_posts_limit,
        }
    }
}
