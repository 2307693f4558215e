use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Unknown peer command {0:?}")]
    UnknownCommand(String),
    #[error("Malformed payload for peer command {command:?}: {reason}")]
    MalformedPayload {
        command: &'static str,
        reason: String,
    },
    #[error("Malformed metadata value for key {key:?}")]
    MalformedMetadata { key: &'static str },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
