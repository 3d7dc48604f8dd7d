use thiserror::Error;

#[derive(Error, Debug)]
pub enum DorkError {
    /// Fast or deep dork generation failed. Surfaced to the user, never retried.
    #[error("Generation error: {0}")]
    Generation(String),

    /// Keyword suggestions failed. Logged and swallowed; callers see an empty list.
    #[error("Suggestion error: {0}")]
    Suggestion(String),

    /// A chat turn failed. The transcript records a fallback reply instead.
    #[error("Chat error: {0}")]
    Chat(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
