pub mod error;
pub mod gemini;
pub mod schema;
pub mod traits;
pub mod util;

pub use error::AiError;
pub use gemini::{Gemini, GeminiOutputBuilder, GeminiPromptBuilder};
pub use schema::StructuredOutput;
pub use traits::{Agent, Message, MessageRole, OutputBuilder, PromptBuilder};
pub use util::{strip_code_blocks, truncate_to_char_boundary};
