pub mod catalog;
pub mod chat;
pub mod config;
pub mod draft;
pub mod error;
pub mod gateway;
pub mod gemini;
pub mod operator;
pub mod search;
pub mod testing;
pub mod tips;

pub use catalog::{category, Category, DorkEntry, Icon, CATEGORIES};
pub use chat::{ChatMessage, ChatRole, ChatTranscript, CHAT_FALLBACK_TEXT, NO_RESPONSE_TEXT};
pub use config::Config;
pub use draft::QueryDraft;
pub use error::DorkError;
pub use gateway::{ChatSession, DorkGateway, GenerationMode};
pub use gemini::{GeminiChatSession, GeminiGateway};
pub use operator::{find_operator, normalize_file_type, Operator, FILE_TYPES, OPERATORS};
pub use search::{search_url, DEFAULT_SEARCH_URL};
pub use tips::{Tip, TipSection, RESPONSIBLE_USE_WARNING, TIP_SECTIONS};
