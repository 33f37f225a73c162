//! Agentry Common - Shared utilities and types
//!
//! This crate provides the common error type, configuration structs,
//! constants and utility functions used across all Agentry components.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::{AgentDefaults, BaseConfig, EmbeddingConfig, LlmConfig, ServerSettings};
pub use constants::*;
pub use error::{AgentryError, Result};
pub use types::CallerIdentity;
pub use utils::*;
