use thiserror::Error;

/// Failure modes of the transaction-creation remote call.
#[derive(Error, Debug)]
pub enum RpcError {
    /// The backend explicitly reported a failure with a message payload.
    #[error("{message}")]
    Backend { message: String },
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RpcError {
    /// Structured failures carry a backend-authored message that is safe to
    /// show to the user verbatim. Everything else gets a generic dialog.
    pub fn structured_message(&self) -> Option<&str> {
        match self {
            Self::Backend { message } => Some(message),
            _ => None,
        }
    }
}
