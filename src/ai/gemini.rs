//! Gemini `generateContent` client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{GenerationError, TextGenerator};
use crate::config::GeminiConfig;
use crate::document::prompt::EMPTY_RESPONSE_PLACEHOLDER;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: ResponseContent,
}

#[derive(Debug, Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

/// HTTP client for the Gemini text-generation API.
///
/// The credential is injected through [`GeminiConfig`] at construction; it
/// is never read from the environment at call time. An absent key is not
/// validated here and simply fails the downstream call.
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}:generateContent?key={}",
            self.config.base_url, self.config.model, self.config.api_key
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.config.sampling.temperature,
                top_p: self.config.sampling.top_p,
            },
        };

        log::info!(
            "Requesting document generation from model {} ({} prompt bytes)",
            self.config.model,
            prompt.len()
        );

        let response = self.client.post(self.endpoint()).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            log::error!("Gemini API returned {status}: {detail}");
            return Err(GenerationError::UnusableResponse);
        }

        let payload: GenerateContentResponse = response.json().await?;

        Ok(response_text(payload))
    }
}

/// Concatenate the text of the first candidate. An empty payload is a
/// soft success carrying a fixed placeholder, not an error.
fn response_text(payload: GenerateContentResponse) -> String {
    let text: String = payload
        .candidates
        .into_iter()
        .next()
        .map(|candidate| {
            candidate
                .content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        log::warn!("Gemini API returned an empty payload, using placeholder text");
        return EMPTY_RESPONSE_PLACEHOLDER.to_string();
    }

    text
}
