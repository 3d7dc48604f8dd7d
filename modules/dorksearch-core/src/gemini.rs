use ai_client::{Agent, AiError, Gemini, Message, OutputBuilder, PromptBuilder};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::DorkError;
use crate::gateway::{
    dork_instruction, suggestion_prompt, ChatSession, DorkGateway, GenerationMode,
    CHAT_SYSTEM_INSTRUCTION, SUGGESTION_COUNT,
};

const FAST_TEMPERATURE: f32 = 0.2;
const FAST_MAX_OUTPUT_TOKENS: u32 = 200;
const DEEP_THINKING_BUDGET: u32 = 32768;

/// [`DorkGateway`] backed by the Gemini API, one agent per role.
#[derive(Clone)]
pub struct GeminiGateway {
    fast: Gemini,
    deep: Gemini,
    suggest: Gemini,
    chat: Gemini,
}

impl GeminiGateway {
    pub fn from_config(config: &Config) -> Self {
        let mut base = Gemini::new(&config.gemini_api_key, &config.fast_model);
        if let Some(ref url) = config.gemini_base_url {
            base = base.with_base_url(url);
        }

        Self {
            fast: base.clone(),
            deep: base.with_model(&config.deep_model),
            suggest: base.with_model(&config.suggest_model),
            chat: base.with_model(&config.chat_model),
        }
    }

    async fn fetch_suggestions(&self, keyword: &str) -> Result<Vec<String>, DorkError> {
        let result = self
            .suggest
            .prompt(suggestion_prompt(keyword))
            .output::<Vec<String>>()
            .send()
            .await;

        match result {
            Ok(mut items) => {
                items.truncate(SUGGESTION_COUNT);
                Ok(items)
            }
            // No text at all is an empty list, not a failure.
            Err(e) if matches!(e.downcast_ref::<AiError>(), Some(AiError::EmptyResponse(_))) => {
                Ok(Vec::new())
            }
            Err(e) => Err(DorkError::Suggestion(format!("{:#}", e))),
        }
    }
}

#[async_trait]
impl DorkGateway for GeminiGateway {
    async fn generate_dork(&self, prompt: &str, mode: GenerationMode) -> Result<String, DorkError> {
        let builder = match mode {
            GenerationMode::Fast => self
                .fast
                .prompt(dork_instruction(prompt))
                .temperature(FAST_TEMPERATURE)
                .max_output_tokens(FAST_MAX_OUTPUT_TOKENS),
            GenerationMode::Deep => self
                .deep
                .prompt(dork_instruction(prompt))
                .temperature(FAST_TEMPERATURE)
                .thinking_budget(DEEP_THINKING_BUDGET),
        };

        debug!(?mode, "Generating dork");

        let text = builder.send().await.map_err(|e| {
            warn!(?mode, error = %format!("{:#}", e), "Dork generation failed");
            DorkError::Generation(format!("{:#}", e))
        })?;

        Ok(text.trim().to_string())
    }

    async fn suggestions(&self, keyword: &str) -> Vec<String> {
        match self.fetch_suggestions(keyword).await {
            Ok(items) => items,
            Err(e) => {
                warn!(error = %e, "Suggestions unavailable");
                Vec::new()
            }
        }
    }

    fn create_chat_session(&self) -> Box<dyn ChatSession> {
        Box::new(GeminiChatSession::new(self.chat.clone()))
    }
}

// =============================================================================
// Chat Session
// =============================================================================

/// Conversation with the chat model. History lives only as long as the session.
pub struct GeminiChatSession {
    agent: Gemini,
    history: Vec<Message>,
}

impl GeminiChatSession {
    pub fn new(agent: Gemini) -> Self {
        Self {
            agent,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }
}

#[async_trait]
impl ChatSession for GeminiChatSession {
    async fn send(&mut self, message: &str) -> Result<String, DorkError> {
        let reply = self
            .agent
            .prompt(message)
            .preamble(CHAT_SYSTEM_INSTRUCTION)
            .messages(self.history.clone())
            .send()
            .await
            .map_err(|e| DorkError::Chat(format!("{:#}", e)))?;

        // Only completed turns enter the history. Gemini rejects empty parts.
        if !reply.is_empty() {
            self.history.push(Message::user(message));
            self.history.push(Message::assistant(&reply));
        }

        debug!(turns = self.history.len() / 2, "Chat turn complete");
        Ok(reply)
    }
}
