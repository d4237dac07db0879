//! Environment-backed configuration.

use std::env;

use crate::ai::SamplingConfig;

const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Settings for the Gemini client.
///
/// Built once at startup and handed to the client constructor, so tests can
/// construct one explicitly instead of touching the process environment.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub sampling: SamplingConfig,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            sampling: SamplingConfig::default(),
        }
    }

    /// Read configuration from the environment (`.env` is loaded by the
    /// caller). A missing API key is not an error here; it surfaces as a
    /// failed generation call downstream.
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY").unwrap_or_else(|_| {
            log::warn!("GEMINI_API_KEY not set; generation requests will fail");
            String::new()
        });
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Self::new(api_key, model)
    }
}

/// Address the HTTP server binds to, `BIND_ADDR` or the default.
pub fn bind_addr() -> String {
    env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string())
}
