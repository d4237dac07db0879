//! Shared test helpers: a scripted stand-in for the generation service.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use smartdocs_server::ai::{GenerationError, TextGenerator};

/// Deterministic `TextGenerator` that replays scripted responses and
/// records every prompt it receives.
pub struct MockGenerator {
    responses: Mutex<VecDeque<Result<String, GenerationError>>>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn with_responses(responses: Vec<Result<String, GenerationError>>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn with_response(text: &str) -> Arc<Self> {
        Self::with_responses(vec![Ok(text.to_string())])
    }

    pub fn failing() -> Arc<Self> {
        Self::with_responses(vec![Err(GenerationError::UnusableResponse)])
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().push(prompt.to_string());
        self.responses
            .lock()
            .pop_front()
            .unwrap_or(Err(GenerationError::UnusableResponse))
    }
}
