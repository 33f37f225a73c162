//! Failures of the agent creation operation

use crate::agents::view::TranslationError;
use std::fmt;

/// Why an agent could not be created.
///
/// `Display` yields the underlying description unchanged so it can be
/// surfaced to the caller as-is.
#[derive(Debug)]
pub enum CreateAgentError {
    /// The `config` payload has an unknown key or a mistyped value.
    /// The server was never called.
    InvalidConfig(String),
    /// The agent server rejected the configuration or failed
    Server(anyhow::Error),
    /// The server created the agent but its state could not be translated
    Translation(TranslationError),
}

impl fmt::Display for CreateAgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateAgentError::InvalidConfig(msg) => write!(f, "{}", msg),
            CreateAgentError::Server(err) => write!(f, "{}", err),
            CreateAgentError::Translation(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CreateAgentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CreateAgentError::Translation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CreateAgentError {
    fn from(err: serde_json::Error) -> Self {
        CreateAgentError::InvalidConfig(err.to_string())
    }
}

impl From<TranslationError> for CreateAgentError {
    fn from(err: TranslationError) -> Self {
        CreateAgentError::Translation(err)
    }
}
