use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Request body is not a valid user record
    InvalidBody(String),
    /// Outbound payload could not be encoded
    Serialization(String),
    /// Network failure talking to the search engine
    Transport(String),
    /// Search engine answered with a non-success status
    Engine { status: u16, body: String },
    /// Search engine answered with an unexpected JSON shape
    MalformedResponse(String),
    /// Update/delete called without a document identifier
    MissingId,
}

impl AppError {
    /// Short message returned to HTTP callers. Details stay in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::InvalidBody(_) => "error while parsing body",
            AppError::Serialization(_) => "error while encoding document",
            AppError::Transport(_) | AppError::Engine { .. } => "error while contacting search engine",
            AppError::MalformedResponse(_) => "error while parsing response",
            AppError::MissingId => "ID required",
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidBody(msg) => write!(f, "Invalid body: {}", msg),
            AppError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            AppError::Transport(msg) => write!(f, "Search engine transport error: {}", msg),
            AppError::Engine { status, body } => {
                write!(f, "Search engine error (status {}): {}", status, body)
            }
            AppError::MalformedResponse(msg) => write!(f, "Malformed search engine response: {}", msg),
            AppError::MissingId => write!(f, "Document identifier is required"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Transport(e.to_string())
    }
}
