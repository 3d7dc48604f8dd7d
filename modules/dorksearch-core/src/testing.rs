// Test doubles for the AI gateway.
//
// - MockGateway (DorkGateway) — canned generations and suggestions, scripted chat replies
// - MockChatSession (ChatSession) — pops replies from the gateway's shared script
//
// Both record what they were asked so tests can assert on calls.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::DorkError;
use crate::gateway::{ChatSession, DorkGateway, GenerationMode};

type ChatScript = Arc<Mutex<VecDeque<Result<String, String>>>>;

// ---------------------------------------------------------------------------
// MockGateway
// ---------------------------------------------------------------------------

/// Builder pattern: `.generates()`, `.fails_generation()`, `.suggests()`, `.chat_reply()`.
pub struct MockGateway {
    generation: Result<String, String>,
    suggestions: Vec<String>,
    chat_script: ChatScript,
    generate_calls: Mutex<Vec<(String, GenerationMode)>>,
    suggestion_calls: Mutex<Vec<String>>,
    chat_messages: Arc<Mutex<Vec<String>>>,
    sessions_created: AtomicUsize,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            generation: Ok(String::new()),
            suggestions: Vec::new(),
            chat_script: Arc::new(Mutex::new(VecDeque::new())),
            generate_calls: Mutex::new(Vec::new()),
            suggestion_calls: Mutex::new(Vec::new()),
            chat_messages: Arc::new(Mutex::new(Vec::new())),
            sessions_created: AtomicUsize::new(0),
        }
    }

    pub fn generates(mut self, dork: &str) -> Self {
        self.generation = Ok(dork.to_string());
        self
    }

    pub fn fails_generation(mut self, reason: &str) -> Self {
        self.generation = Err(reason.to_string());
        self
    }

    pub fn suggests(mut self, items: &[&str]) -> Self {
        self.suggestions = items.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Queue the next chat reply. `Err` makes that send fail.
    pub fn chat_reply(self, reply: Result<&str, &str>) -> Self {
        self.chat_script
            .lock()
            .unwrap()
            .push_back(reply.map(str::to_string).map_err(str::to_string));
        self
    }

    pub fn generate_calls(&self) -> Vec<(String, GenerationMode)> {
        self.generate_calls.lock().unwrap().clone()
    }

    pub fn suggestion_calls(&self) -> Vec<String> {
        self.suggestion_calls.lock().unwrap().clone()
    }

    /// Every message sent to any session created by this gateway, in order.
    pub fn chat_messages(&self) -> Vec<String> {
        self.chat_messages.lock().unwrap().clone()
    }

    pub fn sessions_created(&self) -> usize {
        self.sessions_created.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DorkGateway for MockGateway {
    async fn generate_dork(&self, prompt: &str, mode: GenerationMode) -> Result<String, DorkError> {
        self.generate_calls
            .lock()
            .unwrap()
            .push((prompt.to_string(), mode));
        self.generation
            .clone()
            .map(|dork| dork.trim().to_string())
            .map_err(DorkError::Generation)
    }

    async fn suggestions(&self, keyword: &str) -> Vec<String> {
        self.suggestion_calls.lock().unwrap().push(keyword.to_string());
        self.suggestions.clone()
    }

    fn create_chat_session(&self) -> Box<dyn ChatSession> {
        self.sessions_created.fetch_add(1, Ordering::SeqCst);
        Box::new(MockChatSession {
            script: self.chat_script.clone(),
            received: self.chat_messages.clone(),
        })
    }
}

// ---------------------------------------------------------------------------
// MockChatSession
// ---------------------------------------------------------------------------

/// Replies from the shared script. An exhausted script fails the send.
pub struct MockChatSession {
    script: ChatScript,
    received: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl ChatSession for MockChatSession {
    async fn send(&mut self, message: &str) -> Result<String, DorkError> {
        self.received.lock().unwrap().push(message.to_string());
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(reason)) => Err(DorkError::Chat(reason)),
            None => Err(DorkError::Chat("MockChatSession: no reply scripted".to_string())),
        }
    }
}
