//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::{MatchService, QueueService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Queue service owning the in-memory waiting list.
    pub queue_service: Arc<QueueService>,
    /// Match service recording completed games.
    pub match_service: Arc<MatchService>,
    /// Fallback place key when a request omits `place`.
    pub default_place: String,
}
