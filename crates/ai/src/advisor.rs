//! The advisor trait and its HTTP-backed implementation.

use async_trait::async_trait;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{AdvisorError, AdvisorResult};
use crate::prompt_template::{render_contribution_prompt, PROMPT_TEMPLATE_VERSION};
use crate::types::{ContributionSuggestion, ContributionSuggestionRequest};

/// Contribution advisor seam. The server holds this as a trait object so
/// tests can swap in a canned implementation.
#[async_trait]
pub trait AdvisorTrait: Send + Sync {
    /// One request, one response. Provider failures surface as
    /// [`AdvisorError::Provider`]; callers decide whether to retry.
    async fn suggest_contribution(
        &self,
        request: ContributionSuggestionRequest,
    ) -> AdvisorResult<ContributionSuggestion>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProviderRequest {
    prompt: String,
    prompt_version: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProviderResponse {
    suggested_monthly_contribution: i64,
    reasoning: String,
}

/// Advisor backed by an external completion API.
pub struct HttpAdvisor {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl HttpAdvisor {
    pub fn new(api_url: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
        }
    }
}

#[async_trait]
impl AdvisorTrait for HttpAdvisor {
    async fn suggest_contribution(
        &self,
        request: ContributionSuggestionRequest,
    ) -> AdvisorResult<ContributionSuggestion> {
        request.validate()?;
        if self.api_key.trim().is_empty() {
            return Err(AdvisorError::MissingApiKey);
        }

        let payload = ProviderRequest {
            prompt: render_contribution_prompt(&request),
            prompt_version: PROMPT_TEMPLATE_VERSION,
        };
        debug!(
            "Requesting contribution suggestion (prompt v{})",
            PROMPT_TEMPLATE_VERSION
        );

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisorError::provider(format!(
                "Advisor API returned {}: {}",
                status, body
            )));
        }

        let parsed: ProviderResponse = response
            .json()
            .await
            .map_err(|e| AdvisorError::provider(format!("Malformed advisor response: {}", e)))?;

        if parsed.suggested_monthly_contribution <= 0 {
            return Err(AdvisorError::provider(format!(
                "Advisor suggested a non-positive contribution: {}",
                parsed.suggested_monthly_contribution
            )));
        }

        Ok(ContributionSuggestion {
            suggested_monthly_contribution: parsed.suggested_monthly_contribution,
            reasoning: parsed.reasoning,
        })
    }
}
