use thiserror::Error;

#[derive(Error, Debug)]
pub enum HaskerError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Vote endpoint returned status {0}")]
    Status(u16),

    #[error("Malformed vote response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown vote result: {0}")]
    UnknownResult(String),

    #[error("Vote response for '{0}' is missing the vote count")]
    MissingVotes(String),

    #[error("Element not found: {0}")]
    MissingElement(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl HaskerError {
    /// True when the request never produced a usable HTTP reply.
    pub fn is_transport(&self) -> bool {
        matches!(self, HaskerError::Transport(_) | HaskerError::Status(_))
    }
}

pub type Result<T> = std::result::Result<T, HaskerError>;
