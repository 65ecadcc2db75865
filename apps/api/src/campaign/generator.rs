//! Plan Generator: the external step that turns a submitted form into plan text.
//!
//! `AppState` holds an `Arc<dyn PlanGenerator>`, chosen at startup: Gemini when an API
//! key is configured, otherwise an offline generator that always declines so the
//! results endpoint falls back to synthesized data.

use async_trait::async_trait;
use tracing::info;

use crate::campaign::prompts::render_plan_prompt;
use crate::llm_client::prompts::PLAN_FORMAT_SYSTEM;
use crate::llm_client::{GeminiClient, LlmError};
use crate::models::form::CampaignForm;

#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Returns the generated plan text. Never retried by callers.
    async fn generate(&self, form: &CampaignForm) -> Result<String, LlmError>;

    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini
// ────────────────────────────────────────────────────────────────────────────

pub struct GeminiPlanGenerator {
    client: GeminiClient,
}

impl GeminiPlanGenerator {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PlanGenerator for GeminiPlanGenerator {
    async fn generate(&self, form: &CampaignForm) -> Result<String, LlmError> {
        let prompt = render_plan_prompt(form);
        info!(
            "Generating plan with {} for business {:?}",
            self.client.model(),
            form.business_name
        );
        self.client
            .generate_text(&prompt, PLAN_FORMAT_SYSTEM)
            .await
    }

    fn backend(&self) -> &'static str {
        "gemini"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Offline
// ────────────────────────────────────────────────────────────────────────────

/// Used when no API key is configured.
pub struct OfflinePlanGenerator;

#[async_trait]
impl PlanGenerator for OfflinePlanGenerator {
    async fn generate(&self, _form: &CampaignForm) -> Result<String, LlmError> {
        Err(LlmError::NotConfigured)
    }

    fn backend(&self) -> &'static str {
        "offline"
    }
}

/// Test double returning canned plan text, or `EmptyContent` when given none.
#[cfg(test)]
pub struct CannedPlanGenerator(pub Option<String>);

#[cfg(test)]
#[async_trait]
impl PlanGenerator for CannedPlanGenerator {
    async fn generate(&self, _form: &CampaignForm) -> Result<String, LlmError> {
        self.0.clone().ok_or(LlmError::EmptyContent)
    }

    fn backend(&self) -> &'static str {
        "canned"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_generator_always_declines() {
        let result = OfflinePlanGenerator.generate(&CampaignForm::default()).await;
        assert!(matches!(result, Err(LlmError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_canned_generator_returns_text_or_empty_content() {
        let text = CannedPlanGenerator(Some("plan".to_string()))
            .generate(&CampaignForm::default())
            .await
            .unwrap();
        assert_eq!(text, "plan");

        let empty = CannedPlanGenerator(None)
            .generate(&CampaignForm::default())
            .await;
        assert!(matches!(empty, Err(LlmError::EmptyContent)));
    }
}
