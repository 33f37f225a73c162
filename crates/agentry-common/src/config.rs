//! Configuration types and utilities for Agentry

use crate::constants::{self, embedding, llm, presets};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;
use uuid::Uuid;

/// Top-level settings file for the API server
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub base: BaseConfig,
    /// Creation parameters used when a request leaves them out
    pub defaults: AgentDefaults,
    /// Bearer token -> user id
    pub api_keys: HashMap<String, Uuid>,
    /// When set and no api keys are configured, every request runs as this user
    pub default_user: Option<Uuid>,
}

impl ServerSettings {
    /// Load settings from a TOML file, falling back to defaults if it doesn't exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            debug!("Settings file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)?;
        let settings = toml::from_str(&raw)?;
        debug!("Loaded settings from {:?}", path);
        Ok(settings)
    }
}

/// Base configuration that all components can use
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            host: constants::DEFAULT_HOST.to_string(),
            port: constants::DEFAULT_PORT,
            log_level: constants::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Language model configuration as the agent server stores it.
///
/// Every field is optional; a partially filled config is completed from
/// [`AgentDefaults`] with [`LlmConfig::or`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LlmConfig {
    pub model: Option<String>,
    pub model_endpoint_type: Option<String>,
    pub model_endpoint: Option<String>,
    pub model_wrapper: Option<String>,
    pub context_window: Option<u32>,
}

impl LlmConfig {
    /// Fill every unset field from `fallback`
    pub fn or(self, fallback: &LlmConfig) -> LlmConfig {
        LlmConfig {
            model: self.model.or_else(|| fallback.model.clone()),
            model_endpoint_type: self
                .model_endpoint_type
                .or_else(|| fallback.model_endpoint_type.clone()),
            model_endpoint: self.model_endpoint.or_else(|| fallback.model_endpoint.clone()),
            model_wrapper: self.model_wrapper.or_else(|| fallback.model_wrapper.clone()),
            context_window: self.context_window.or(fallback.context_window),
        }
    }
}

/// Embedding configuration as the agent server stores it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EmbeddingConfig {
    pub embedding_endpoint_type: Option<String>,
    pub embedding_endpoint: Option<String>,
    pub embedding_model: Option<String>,
    pub embedding_dim: Option<u32>,
    pub embedding_chunk_size: Option<u32>,
}

impl EmbeddingConfig {
    /// Fill every unset field from `fallback`
    pub fn or(self, fallback: &EmbeddingConfig) -> EmbeddingConfig {
        EmbeddingConfig {
            embedding_endpoint_type: self
                .embedding_endpoint_type
                .or_else(|| fallback.embedding_endpoint_type.clone()),
            embedding_endpoint: self
                .embedding_endpoint
                .or_else(|| fallback.embedding_endpoint.clone()),
            embedding_model: self.embedding_model.or_else(|| fallback.embedding_model.clone()),
            embedding_dim: self.embedding_dim.or(fallback.embedding_dim),
            embedding_chunk_size: self.embedding_chunk_size.or(fallback.embedding_chunk_size),
        }
    }
}

/// Defaults applied by the agent server to omitted creation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentDefaults {
    pub preset: String,
    pub persona: String,
    pub human: String,
    pub llm_config: LlmConfig,
    pub embedding_config: EmbeddingConfig,
}

impl Default for AgentDefaults {
    fn default() -> Self {
        Self {
            preset: presets::DEFAULT_PRESET.to_string(),
            persona: presets::DEFAULT_PERSONA.to_string(),
            human: presets::DEFAULT_HUMAN.to_string(),
            llm_config: LlmConfig {
                model: Some(llm::DEFAULT_MODEL.to_string()),
                model_endpoint_type: Some(llm::DEFAULT_ENDPOINT_TYPE.to_string()),
                model_endpoint: Some(llm::DEFAULT_ENDPOINT.to_string()),
                model_wrapper: None,
                context_window: Some(llm::DEFAULT_CONTEXT_WINDOW),
            },
            embedding_config: EmbeddingConfig {
                embedding_endpoint_type: Some(embedding::DEFAULT_ENDPOINT_TYPE.to_string()),
                embedding_endpoint: Some(embedding::DEFAULT_ENDPOINT.to_string()),
                embedding_model: Some(embedding::DEFAULT_MODEL.to_string()),
                embedding_dim: Some(embedding::DEFAULT_DIM),
                embedding_chunk_size: Some(embedding::DEFAULT_CHUNK_SIZE),
            },
        }
    }
}
