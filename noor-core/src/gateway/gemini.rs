//! Gemini gateway implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::env;
use tracing::{debug, info, warn};

use super::types::{GatewayError, GatewayReply};
use super::ResponseGateway;
use crate::config::AppConfig;
use crate::constants::API_KEY_VAR;

/// Gateway backed by the Google Gemini API. One `generateContent` call per
/// prompt, authenticated with a query-parameter key read from the
/// environment once at construction.
#[derive(Clone)]
pub struct GeminiGateway {
    http: Client,
    endpoint: String,
    api_path: String,
    model: String,
    temperature: f64,
    system_instruction: String,
    api_key: Option<String>,
}

impl GeminiGateway {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            http: Client::new(),
            endpoint: config.endpoint.clone(),
            api_path: config.api_path.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            system_instruction: config.system_prompt.clone(),
            api_key: resolve_api_key(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_model_url(&self) -> String {
        let base = self.endpoint.trim_end_matches('/');
        format!("{base}/{}/{}:generateContent", self.api_path, self.model)
    }

    async fn generate(&self, prompt: &str) -> Result<String, GatewayError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(GatewayError::MissingApiKey(API_KEY_VAR))?;

        let payload = json!({
            "system_instruction": {
                "parts": [{"text": self.system_instruction}]
            },
            "contents": [{
                "role": "user",
                "parts": [{"text": prompt}]
            }],
            "generationConfig": {
                "temperature": self.temperature
            }
        });

        info!(model = self.model.as_str(), "Sending request to Gemini");

        let url = format!("{}?key={}", self.build_model_url(), api_key);
        let response: GeminiResponse = self
            .http
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(GatewayError::network)?
            .error_for_status()
            .map_err(GatewayError::network)?
            .json()
            .await
            .map_err(|e| GatewayError::invalid_response(e.to_string()))?;
        debug!("Received response from Gemini");

        extract_text(response)
    }
}

#[async_trait]
impl ResponseGateway for GeminiGateway {
    async fn respond(&self, prompt: &str) -> GatewayReply {
        let result = self.generate(prompt).await;
        if let Err(err) = &result {
            warn!(error = %err, "Gemini call failed; substituting fallback text");
        }
        GatewayReply::from_result(result)
    }
}

/// Read the API credential from the environment. A missing key degrades
/// every call to the error fallback instead of failing construction.
fn resolve_api_key() -> Option<String> {
    match env::var(API_KEY_VAR) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        _ => {
            warn!(
                env_var = API_KEY_VAR,
                "API key environment variable is not set; calls will fall back to error text"
            );
            None
        }
    }
}

/// Pull the answer text out of a decoded response. A candidate with no text,
/// or with empty text, counts as an empty response.
fn extract_text(response: GeminiResponse) -> Result<String, GatewayError> {
    response
        .candidates
        .unwrap_or_default()
        .into_iter()
        .flat_map(|c| c.content)
        .flat_map(|c| c.parts)
        .find_map(|p| p.text)
        .filter(|t| !t.is_empty())
        .ok_or(GatewayError::EmptyResponse)
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
