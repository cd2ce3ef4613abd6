use super::ReflectionService;
use super::prompts::{
    ANALYSIS_INSTRUCTION, WEEKLY_INSTRUCTION, analysis_prompt, analysis_schema, weekly_prompt,
    weekly_schema,
};
use crate::Config;
use crate::dates::DEFAULT_DATE_FORMAT;
use crate::analysis::{JournalAnalysis, WeeklyAnalysis};
use crate::entry::PersistedJournalEntry;
use crate::error::ServiceError;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

/// Reflection service backed by Gemini's `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    /// strftime pattern for entry dates in the weekly prompt.
    date_format: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.into(),
            base_url: base_url.into(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    pub fn with_date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_key.clone(),
            config.model.clone(),
            config.api_base_url.clone(),
        )
        .with_date_format(config.date_format.clone())
    }

    /// `{base_url}/v1beta/models/{model}:generateContent`
    pub fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }

    async fn generate<T: DeserializeOwned>(
        &self,
        instruction: &str,
        prompt: &str,
        schema: Value,
    ) -> Result<T, ServiceError> {
        let api_key = self.api_key.as_deref().ok_or(ServiceError::MissingApiKey)?;
        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part { text: instruction }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            },
        };

        debug!(model = %self.model, "sending generateContent request");
        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "reflection service returned an error");
            return Err(parse_error(status.as_u16(), &body));
        }
        parse_response(&body)
    }
}

#[async_trait]
impl ReflectionService for GeminiClient {
    async fn analyze(&self, text: &str) -> Result<JournalAnalysis, ServiceError> {
        info!(chars = text.chars().count(), "requesting journal analysis");
        self.generate(ANALYSIS_INSTRUCTION, &analysis_prompt(text), analysis_schema())
            .await
    }

    async fn summarize(
        &self,
        entries: &[PersistedJournalEntry],
    ) -> Result<WeeklyAnalysis, ServiceError> {
        info!(entries = entries.len(), "requesting weekly review");
        let prompt = weekly_prompt(entries, &self.date_format);
        self.generate(WEEKLY_INSTRUCTION, &prompt, weekly_schema())
            .await
    }
}

/// Extracts the JSON payload from the first candidate and deserializes it.
fn parse_response<T: DeserializeOwned>(body: &str) -> Result<T, ServiceError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| ServiceError::Malformed(format!("invalid response body: {e}")))?;

    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(ServiceError::Malformed(format!(
            "the entry was blocked ({reason})"
        )));
    }

    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| ServiceError::Malformed("no candidates returned".to_string()))?;
    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();
    if text.trim().is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(ServiceError::Malformed(format!(
            "empty response (finish reason {reason})"
        )));
    }

    serde_json::from_str(strip_code_fence(&text))
        .map_err(|e| ServiceError::Malformed(format!("could not read reflection: {e}")))
}

fn parse_error(status: u16, body: &str) -> ServiceError {
    let message = serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.error.message)
        .filter(|m| !m.trim().is_empty());
    ServiceError::Api { status, message }
}

/// Some models wrap JSON output in a Markdown code fence even when asked not to.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    match trimmed.strip_prefix("```") {
        Some(rest) => {
            let rest = rest.strip_prefix("json").unwrap_or(rest);
            rest.strip_suffix("```").unwrap_or(rest).trim()
        }
        None => trimmed,
    }
}
