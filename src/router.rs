use axum::{Router, extract::DefaultBodyLimit, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::health::health_handler;
use crate::handlers::polls::{create_poll, delete_poll, get_poll, list_polls, update_poll};
use crate::service::PollsHandle;

/// Shared router state; cloned into every handler.
#[derive(Clone)]
pub struct PollsState {
    pub polls: PollsHandle,
}

impl PollsState {
    pub fn new(polls: PollsHandle) -> Self {
        Self { polls }
    }
}

pub fn polls_router(state: PollsState, body_limit: usize) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/api/polls", get(list_polls).post(create_poll))
        .route(
            "/api/polls/{id}",
            get(get_poll).put(update_poll).delete(delete_poll),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
