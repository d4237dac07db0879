//! Generation-service boundary.
//!
//! The document body is produced by an external generative model; locally
//! this is a single opaque text-completion call. The trait exists so tests
//! and alternative backends can swap in a deterministic implementation.

pub mod gemini;

use async_trait::async_trait;
use thiserror::Error;

pub use gemini::GeminiClient;

/// Errors from a generation attempt.
///
/// Callers surface these as one generic "failed to generate document"
/// message; no cause distinction is carried past the HTTP boundary.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("failed to communicate with the generation service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generation service returned an unusable response")]
    UnusableResponse,
}

/// Fixed sampling parameters sent with every generation request.
#[derive(Debug, Clone, Copy)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

/// Single-call text generation. No retries, no streaming, no cancellation;
/// an issued call runs to completion or error.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
