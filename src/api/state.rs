//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::services::AssistantService;

/// State shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<AssistantService>,
}

impl AppState {
    pub fn new(assistant: Arc<AssistantService>) -> Self {
        Self { assistant }
    }
}
