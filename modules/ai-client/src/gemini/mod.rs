mod client;
pub mod prompt_builder;
pub(crate) mod types;

pub use prompt_builder::{GeminiOutputBuilder, GeminiPromptBuilder};

use crate::traits::Agent;

use client::{GeminiClient, GEMINI_API_URL};

// =============================================================================
// Gemini Agent
// =============================================================================

#[derive(Clone)]
pub struct Gemini {
    api_key: String,
    pub(crate) model: String,
    base_url: Option<String>,
    http: reqwest::Client,
}

impl Gemini {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
            base_url: None,
            http: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(GEMINI_API_URL)
    }

    pub(crate) fn client(&self) -> GeminiClient<'_> {
        GeminiClient::new(&self.api_key, &self.http, self.base_url())
    }
}

// =============================================================================
// Agent Implementation
// =============================================================================

impl Agent for Gemini {
    type PromptBuilder = GeminiPromptBuilder;

    fn with_model(&self, model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..self.clone()
        }
    }

    fn prompt(&self, input: impl Into<String>) -> GeminiPromptBuilder {
        GeminiPromptBuilder::new(self.clone(), input.into())
    }
}
