use std::marker::PhantomData;

use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use schemars::JsonSchema;
use tracing::debug;

use crate::error::AiError;
use crate::schema::StructuredOutput;
use crate::traits::{Message, MessageRole, OutputBuilder, PromptBuilder};
use crate::util::strip_code_blocks;

use super::types::*;
use super::Gemini;

pub struct GeminiPromptBuilder {
    agent: Gemini,
    input: String,
    preamble: Option<String>,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
    thinking_budget: Option<u32>,
    messages: Vec<Message>,
}

impl GeminiPromptBuilder {
    pub(crate) fn new(agent: Gemini, input: String) -> Self {
        Self {
            agent,
            input,
            preamble: None,
            temperature: None,
            max_output_tokens: None,
            thinking_budget: None,
            messages: Vec::new(),
        }
    }

    /// Create a structured output builder that decodes the reply as `T`.
    pub fn output<T: DeserializeOwned + JsonSchema + Send + 'static>(
        self,
    ) -> GeminiOutputBuilder<T> {
        GeminiOutputBuilder {
            builder: self,
            _phantom: PhantomData,
        }
    }

    fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
            thinking_config: self
                .thinking_budget
                .map(|thinking_budget| ThinkingConfig { thinking_budget }),
            ..Default::default()
        }
    }

    pub(crate) fn build_request(&self, config: GenerationConfig) -> GenerateContentRequest {
        let mut request = GenerateContentRequest::new();
        let mut system = self.preamble.clone().unwrap_or_default();

        for msg in &self.messages {
            match msg.role {
                MessageRole::System => {
                    // Gemini takes one top-level system instruction, merge into it
                    if !system.is_empty() {
                        system.push_str("\n\n");
                    }
                    system.push_str(&msg.content);
                }
                MessageRole::User => request = request.content(Content::user(&msg.content)),
                MessageRole::Assistant => request = request.content(Content::model(&msg.content)),
            }
        }

        if !self.input.is_empty() {
            request = request.content(Content::user(&self.input));
        }

        if !system.is_empty() {
            request = request.system(system);
        }

        request.config(config)
    }
}

#[async_trait]
impl PromptBuilder for GeminiPromptBuilder {
    fn preamble(mut self, preamble: impl Into<String>) -> Self {
        self.preamble = Some(preamble.into());
        self
    }

    fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    fn max_output_tokens(mut self, max_tokens: u32) -> Self {
        self.max_output_tokens = Some(max_tokens);
        self
    }

    fn thinking_budget(mut self, budget: u32) -> Self {
        self.thinking_budget = Some(budget);
        self
    }

    fn messages(mut self, messages: Vec<Message>) -> Self {
        self.messages = messages;
        self
    }

    async fn send(self) -> Result<String> {
        let request = self.build_request(self.generation_config());
        let response = self
            .agent
            .client()
            .generate_content(&self.agent.model, &request)
            .await?;

        Ok(response.text().unwrap_or_default())
    }
}

// =============================================================================
// Structured Output Builder
// =============================================================================

pub struct GeminiOutputBuilder<T> {
    builder: GeminiPromptBuilder,
    _phantom: PhantomData<T>,
}

impl<T: DeserializeOwned + JsonSchema + Send + 'static> GeminiOutputBuilder<T> {
    pub(crate) fn build_request(&self) -> GenerateContentRequest {
        let config = GenerationConfig {
            response_mime_type: Some("application/json".to_string()),
            response_schema: Some(T::gemini_schema()),
            ..self.builder.generation_config()
        };
        self.builder.build_request(config)
    }
}

#[async_trait]
impl<T: DeserializeOwned + JsonSchema + Send + 'static> OutputBuilder<T>
    for GeminiOutputBuilder<T>
{
    async fn send(self) -> Result<T> {
        debug!(
            type_name = T::type_name(),
            model = %self.builder.agent.model,
            "Gemini structured output request"
        );

        let request = self.build_request();
        let agent = &self.builder.agent;
        let response = agent
            .client()
            .generate_content(&agent.model, &request)
            .await?;

        let text = response
            .text()
            .ok_or_else(|| AiError::EmptyResponse(agent.model.clone()))?;

        let parsed = serde_json::from_str(strip_code_blocks(&text)).map_err(AiError::from)?;
        Ok(parsed)
    }
}
