//! Versioned assistant API

pub mod query;

use axum::{routing::post, Router};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new().route("/query", post(query::handle_query))
}
