//! The narrow AI capability the rest of the app depends on.
//!
//! Three operations: dork generation (fast or deep), keyword suggestions and
//! chat sessions. [`crate::gemini::GeminiGateway`] is the production
//! implementation; [`crate::testing::MockGateway`] stands in for it in tests.

use async_trait::async_trait;

use crate::error::DorkError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationMode {
    /// Lightweight model, bounded output, low temperature.
    #[default]
    Fast,
    /// Higher-capability model with an extended reasoning budget and no output cap.
    Deep,
}

impl GenerationMode {
    pub fn from_deep_flag(deep: bool) -> Self {
        if deep {
            GenerationMode::Deep
        } else {
            GenerationMode::Fast
        }
    }
}

#[async_trait]
pub trait DorkGateway: Send + Sync {
    /// Translate a natural-language request into a single raw dork string.
    ///
    /// Returns the trimmed model text, or an empty string if the model
    /// returned nothing.
    async fn generate_dork(&self, prompt: &str, mode: GenerationMode) -> Result<String, DorkError>;

    /// At most [`SUGGESTION_COUNT`] keyword refinements. Never fails: any error yields an empty list.
    async fn suggestions(&self, keyword: &str) -> Vec<String>;

    /// A fresh conversation primed with [`CHAT_SYSTEM_INSTRUCTION`].
    fn create_chat_session(&self) -> Box<dyn ChatSession>;
}

/// Stateful conversation handle. Context accumulates across sends.
#[async_trait]
pub trait ChatSession: Send {
    async fn send(&mut self, message: &str) -> Result<String, DorkError>;
}

// =============================================================================
// Prompts
// =============================================================================

pub const CHAT_SYSTEM_INSTRUCTION: &str = "You are an elite OSINT and Google Dorking assistant. \
You help security researchers find exposed data responsibly. You provide clever search queries \
and explain how they work. Be concise, technical, and always mention ethical boundaries.";

pub const SUGGESTION_COUNT: usize = 5;

pub fn dork_instruction(prompt: &str) -> String {
    format!(
        "You are an expert Security Researcher and Google Dorking specialist.\n\
         Task: Translate the user's natural language request into a precise, advanced Google Dork search query.\n\
         Rules:\n\
         1. Output ONLY the raw dork string. Do not include markdown formatting, backticks, or explanations.\n\
         2. Use advanced operators like site:, inurl:, intitle:, filetype:, etc. efficiently.\n\
         \n\
         User Request: {}",
        prompt
    )
}

pub fn suggestion_prompt(keyword: &str) -> String {
    format!(
        "Suggest {} relevant Google Dork keywords or refinements related to: \"{}\". \
         Return a simple JSON array of strings.",
        SUGGESTION_COUNT, keyword
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dork_instruction_embeds_request_last() {
        let text = dork_instruction("public Jira dashboards on .gov");
        assert!(text.starts_with("You are an expert Security Researcher"));
        assert!(text.contains("Output ONLY the raw dork string"));
        assert!(text.ends_with("User Request: public Jira dashboards on .gov"));
    }

    #[test]
    fn suggestion_prompt_quotes_keyword() {
        let text = suggestion_prompt("admin");
        assert!(text.contains("Suggest 5 relevant"));
        assert!(text.contains("related to: \"admin\""));
    }

    #[test]
    fn mode_from_flag() {
        assert_eq!(GenerationMode::from_deep_flag(true), GenerationMode::Deep);
        assert_eq!(GenerationMode::default(), GenerationMode::Fast);
    }
}
