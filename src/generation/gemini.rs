use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

use super::ItineraryGenerator;
use crate::config::GeminiConfig;
use crate::models::Itinerary;
use crate::{Result, TravelPlanError};

/// Google Gemini `generateContent` client
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentRequest {
    /// Single-turn user prompt
    #[must_use]
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
        }
    }
}

impl GenerateContentResponse {
    /// Concatenated text of every part of the first candidate
    #[must_use]
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        Some(text)
    }
}

impl GeminiClient {
    /// Create a new client
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("WanderPlan/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TravelPlanError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl ItineraryGenerator for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    #[instrument(skip(self, prompt), fields(model = %self.model))]
    async fn generate(&self, prompt: &str) -> Result<Itinerary> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            TravelPlanError::config(
                "No Gemini API key configured. Set GEMINI_API_KEY or GOOGLE_API_KEY.",
            )
        })?;

        let start_time = Instant::now();
        debug!("Sending prompt of {} bytes", prompt.len());

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(|e| {
                error!("Gemini request failed: {}", e);
                TravelPlanError::generation(format!("Request to Gemini failed: {e}"))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini returned {}: {}", status, error_text);

            return Err(match status.as_u16() {
                401 | 403 => TravelPlanError::generation("Gemini rejected the API key"),
                429 => TravelPlanError::generation("Gemini rate limit exceeded"),
                _ => TravelPlanError::generation(format!("Gemini API error {status}: {error_text}")),
            });
        }

        let body: GenerateContentResponse = response.json().await.map_err(|e| {
            TravelPlanError::generation(format!("Failed to parse Gemini response: {e}"))
        })?;

        let text = match body.text() {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                let reason = body
                    .prompt_feedback
                    .and_then(|feedback| feedback.block_reason)
                    .or_else(|| body.candidates.first().and_then(|c| c.finish_reason.clone()))
                    .unwrap_or_else(|| "no text returned".to_string());
                warn!("Gemini returned an empty itinerary ({})", reason);
                return Err(TravelPlanError::generation(format!(
                    "Gemini returned no itinerary text ({reason})"
                )));
            }
        };

        info!(
            "Generated itinerary of {} bytes in {:.3}s",
            text.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(Itinerary::new(text))
    }
}
