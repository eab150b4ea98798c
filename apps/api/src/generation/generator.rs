//! Experience tailoring: orchestrates one generation.
//!
//! Flow: build_tailoring_prompt → completion → strip_bold → TailorOutcome.

use tracing::{info, warn};

use crate::generation::format::strip_bold;
use crate::generation::prompts::build_tailoring_prompt;
use crate::llm_client::{CompletionClient, LlmError};
use crate::resume::ResumeExperience;

/// Shown when the completion came back without any usable text.
pub const FAILURE_MESSAGE: &str = "Failed to generate updated experience section.";

/// What the result page shows for one tailoring attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum TailorOutcome {
    Generated(String),
    /// Upstream answered but nothing survived extraction and cleanup.
    Empty,
    /// Transport or decode failure, carrying its message.
    Failed(String),
}

impl TailorOutcome {
    pub fn from_result(result: Result<String, LlmError>) -> Self {
        match result {
            Ok(text) if text.is_empty() => TailorOutcome::Empty,
            Ok(text) => TailorOutcome::Generated(text),
            Err(e) => TailorOutcome::Failed(e.to_string()),
        }
    }

    /// Text rendered as `updated_experience`.
    pub fn into_display_text(self) -> String {
        match self {
            TailorOutcome::Generated(text) => text,
            TailorOutcome::Empty => FAILURE_MESSAGE.to_string(),
            TailorOutcome::Failed(message) => format!("Error: {message}"),
        }
    }
}

/// Rewrites the experience section for `job_description` and strips bold markup.
pub async fn tailor_experience(
    client: &dyn CompletionClient,
    experience: &ResumeExperience,
    job_description: &str,
) -> Result<String, LlmError> {
    let prompt = build_tailoring_prompt(job_description, experience.as_str());

    let raw = client.complete(&prompt).await?;
    let cleaned = strip_bold(&raw);

    info!(
        "Tailoring completed: raw_len={}, cleaned_len={}",
        raw.len(),
        cleaned.len()
    );
    if cleaned.is_empty() {
        warn!("Completion produced no usable text");
    }

    Ok(cleaned)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// Returns a canned reply and remembers the last prompt it saw.
    struct CannedClient {
        reply: Result<String, String>,
        last_prompt: Mutex<Option<String>>,
    }

    impl CannedClient {
        fn ok(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                last_prompt: Mutex::new(None),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                last_prompt: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl CompletionClient for CannedClient {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            *self.last_prompt.lock().unwrap() = Some(prompt.to_string());
            self.reply.clone().map_err(LlmError::Transport)
        }
    }

    #[tokio::test]
    async fn test_tailor_strips_markup() {
        let client = CannedClient::ok("**Tableau** expert with <strong>5 years</strong>");
        let experience = ResumeExperience::embedded();

        let text = tailor_experience(&client, &experience, "Looking for a Tableau expert")
            .await
            .unwrap();
        assert_eq!(text, "Tableau expert with 5 years");
    }

    #[tokio::test]
    async fn test_tailor_sends_built_prompt() {
        let client = CannedClient::ok("ok");
        let experience = ResumeExperience::embedded();

        tailor_experience(&client, &experience, "Rust backend role")
            .await
            .unwrap();

        let prompt = client.last_prompt.lock().unwrap().clone().unwrap();
        assert_eq!(
            prompt,
            build_tailoring_prompt("Rust backend role", experience.as_str())
        );
    }

    #[tokio::test]
    async fn test_tailor_markup_only_reply_is_empty() {
        let client = CannedClient::ok("<b></b>****");
        let experience = ResumeExperience::embedded();

        let text = tailor_experience(&client, &experience, "any").await.unwrap();
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_tailor_propagates_transport_error() {
        let client = CannedClient::failing("timeout");
        let experience = ResumeExperience::embedded();

        let err = tailor_experience(&client, &experience, "any")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "timeout");
    }

    #[test]
    fn test_outcome_display_text() {
        assert_eq!(
            TailorOutcome::from_result(Ok("Led SQL work".to_string())).into_display_text(),
            "Led SQL work"
        );
        assert_eq!(
            TailorOutcome::from_result(Ok(String::new())).into_display_text(),
            FAILURE_MESSAGE
        );
        assert_eq!(
            TailorOutcome::from_result(Err(LlmError::Transport("timeout".to_string())))
                .into_display_text(),
            "Error: timeout"
        );
    }

    #[test]
    fn test_outcome_parse_error_message() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let outcome = TailorOutcome::from_result(Err(LlmError::Parse(parse_err)));
        match outcome {
            TailorOutcome::Failed(message) => assert!(message.starts_with("expected")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
