use std::fmt::{self, Display};

/// Errors produced by model constructors and the payload codec.
#[derive(Debug)]
pub enum ModelError {
    Payload(serde_json::Error),
    InvalidKind(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::Payload(err) => write!(f, "payload codec error: {err}"),
            ModelError::InvalidKind(value) => write!(f, "invalid kind: {value}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ModelError::Payload(err) => Some(err),
            ModelError::InvalidKind(_) => None,
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Payload(err)
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
