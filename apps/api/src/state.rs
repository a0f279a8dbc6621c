use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup and shared read-only by every request.
    /// Default: `LlmClient`; tests swap in an in-process model.
    pub llm: Arc<dyn ChatModel>,
    pub config: Config,
}
