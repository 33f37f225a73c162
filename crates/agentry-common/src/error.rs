//! Agentry Common Error Types
//!
//! Centralized error handling for all Agentry components

use std::fmt;

/// Main error type for Agentry operations
#[derive(Debug)]
pub enum AgentryError {
    /// Generic error with message
    Generic(String),
    /// IO-related errors
    Io(std::io::Error),
    /// Serialization/deserialization errors
    Serde(serde_json::Error),
    /// Configuration errors
    Config(String),
}

impl fmt::Display for AgentryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentryError::Generic(msg) => write!(f, "Agentry error: {}", msg),
            AgentryError::Io(err) => write!(f, "IO error: {}", err),
            AgentryError::Serde(err) => write!(f, "Serialization error: {}", err),
            AgentryError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for AgentryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AgentryError::Io(err) => Some(err),
            AgentryError::Serde(err) => Some(err),
            _ => None,
        }
    }
}

/// Convenience result type for Agentry operations
pub type Result<T> = std::result::Result<T, AgentryError>;

// Implement From traits for common error types
impl From<std::io::Error> for AgentryError {
    fn from(err: std::io::Error) -> Self {
        AgentryError::Io(err)
    }
}

impl From<serde_json::Error> for AgentryError {
    fn from(err: serde_json::Error) -> Self {
        AgentryError::Serde(err)
    }
}

impl From<toml::de::Error> for AgentryError {
    fn from(err: toml::de::Error) -> Self {
        AgentryError::Config(err.to_string())
    }
}

impl From<anyhow::Error> for AgentryError {
    fn from(err: anyhow::Error) -> Self {
        AgentryError::Generic(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = AgentryError::Config("bad port".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad port");

        let err = AgentryError::from(anyhow::anyhow!("boom"));
        assert_eq!(err.to_string(), "Agentry error: boom");
    }

    #[test]
    fn test_io_source_is_kept() {
        use std::error::Error;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = AgentryError::from(io);
        assert!(err.source().is_some());
    }
}
