//! REST endpoint handlers organized by resource.

pub mod queue;
pub mod result;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes the queue and match result routes.
pub fn routes() -> Router<AppState> {
    Router::new().merge(queue::routes()).merge(result::routes())
}
