//! Assistant query endpoint handler

use axum::extract::State;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{Json, QueryInput};
use crate::domain::AssistantResponse;

/// POST /v1/query
///
/// Workflow outcomes, customer-facing errors included, are returned with 200.
/// Only malformed requests are rejected.
pub async fn handle_query(
    State(state): State<AppState>,
    QueryInput(query): QueryInput,
) -> Json<AssistantResponse> {
    debug!(
        query_len = query.text().chars().count(),
        has_attachments = query.attachments().is_some(),
        "Received assistant query"
    );

    Json(state.assistant.handle(query).await)
}
