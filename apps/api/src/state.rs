use std::sync::Arc;

use crate::llm_client::CompletionClient;
use crate::resume::ResumeExperience;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: `LlmClient` against DeepSeek.
    pub completion: Arc<dyn CompletionClient>,
    pub experience: ResumeExperience,
}
