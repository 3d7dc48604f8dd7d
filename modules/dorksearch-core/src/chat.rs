use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::gateway::{ChatSession, DorkGateway};

pub const NO_RESPONSE_TEXT: &str = "No response.";
pub const CHAT_FALLBACK_TEXT: &str =
    "Error connecting to intelligence matrix. Please check your connection.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            text: text.into(),
        }
    }
}

/// State of one chat view: the lazily created session and its append-only transcript.
///
/// The session is created on the first send and reused until the transcript
/// is dropped. Nothing is persisted.
pub struct ChatTranscript {
    gateway: Arc<dyn DorkGateway>,
    session: Option<Box<dyn ChatSession>>,
    messages: Vec<ChatMessage>,
    loading: bool,
}

impl ChatTranscript {
    pub fn new(gateway: Arc<dyn DorkGateway>) -> Self {
        Self {
            gateway,
            session: None,
            messages: Vec::new(),
            loading: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Send one user turn and append the assistant's reply.
    ///
    /// Blank input, or input while a send is outstanding, is ignored and
    /// returns `None`. A failed turn appends [`CHAT_FALLBACK_TEXT`] and the
    /// session stays usable.
    pub async fn send(&mut self, input: &str) -> Option<&ChatMessage> {
        let text = input.trim();
        if text.is_empty() || self.loading {
            return None;
        }

        if self.session.is_none() {
            info!("Creating chat session");
        }
        let gateway = &self.gateway;
        let session = self
            .session
            .get_or_insert_with(|| gateway.create_chat_session());

        self.messages.push(ChatMessage::user(text));
        self.loading = true;

        let reply = match session.send(text).await {
            Ok(reply) if reply.is_empty() => NO_RESPONSE_TEXT.to_string(),
            Ok(reply) => {
                debug!(chars = reply.len(), "Chat reply received");
                reply
            }
            Err(e) => {
                warn!(error = %e, "Chat turn failed");
                CHAT_FALLBACK_TEXT.to_string()
            }
        };

        self.loading = false;
        self.messages.push(ChatMessage::assistant(reply));
        self.messages.last()
    }
}
