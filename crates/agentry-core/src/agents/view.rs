//! Public response model for agent state
//!
//! The server's configuration records are loosely filled; the response
//! model requires the fields a client needs. Translation fails instead of
//! returning a view with holes.

use crate::agents::state::AgentState;
use agentry_common::{EmbeddingConfig, LlmConfig, to_unix_seconds};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Language model configuration exposed to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmConfigModel {
    pub model: String,
    pub model_endpoint_type: String,
    pub model_endpoint: String,
    pub model_wrapper: Option<String>,
    pub context_window: u32,
}

/// Embedding configuration exposed to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingConfigModel {
    pub embedding_endpoint_type: String,
    pub embedding_endpoint: Option<String>,
    pub embedding_model: Option<String>,
    pub embedding_dim: u32,
    pub embedding_chunk_size: u32,
}

/// Flattened projection of [`AgentState`] returned by `POST /agents`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentStateView {
    pub id: Uuid,
    pub name: String,
    pub user_id: Uuid,
    pub preset: String,
    pub persona: String,
    pub human: String,
    pub llm_config: LlmConfigModel,
    pub embedding_config: EmbeddingConfigModel,
    pub state: String,
    /// Seconds since the Unix epoch, truncated
    pub created_at: i64,
}

/// A server configuration record lacks a field the response model requires
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    MissingField {
        config: &'static str,
        field: &'static str,
    },
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::MissingField { config, field } => {
                write!(f, "{}.{} is required but was not set", config, field)
            }
        }
    }
}

impl std::error::Error for TranslationError {}

fn required<T>(
    value: Option<T>,
    config: &'static str,
    field: &'static str,
) -> Result<T, TranslationError> {
    value.ok_or(TranslationError::MissingField { config, field })
}

impl TryFrom<LlmConfig> for LlmConfigModel {
    type Error = TranslationError;

    fn try_from(config: LlmConfig) -> Result<Self, Self::Error> {
        const NAME: &str = "llm_config";
        Ok(LlmConfigModel {
            model: required(config.model, NAME, "model")?,
            model_endpoint_type: required(config.model_endpoint_type, NAME, "model_endpoint_type")?,
            model_endpoint: required(config.model_endpoint, NAME, "model_endpoint")?,
            model_wrapper: config.model_wrapper,
            context_window: required(config.context_window, NAME, "context_window")?,
        })
    }
}

impl TryFrom<EmbeddingConfig> for EmbeddingConfigModel {
    type Error = TranslationError;

    fn try_from(config: EmbeddingConfig) -> Result<Self, Self::Error> {
        const NAME: &str = "embedding_config";
        Ok(EmbeddingConfigModel {
            embedding_endpoint_type: required(
                config.embedding_endpoint_type,
                NAME,
                "embedding_endpoint_type",
            )?,
            embedding_endpoint: config.embedding_endpoint,
            embedding_model: config.embedding_model,
            embedding_dim: required(config.embedding_dim, NAME, "embedding_dim")?,
            embedding_chunk_size: required(
                config.embedding_chunk_size,
                NAME,
                "embedding_chunk_size",
            )?,
        })
    }
}

impl TryFrom<AgentState> for AgentStateView {
    type Error = TranslationError;

    fn try_from(agent: AgentState) -> Result<Self, Self::Error> {
        let llm_config = LlmConfigModel::try_from(agent.llm_config)?;
        let embedding_config = EmbeddingConfigModel::try_from(agent.embedding_config)?;

        Ok(AgentStateView {
            id: agent.id,
            name: agent.name,
            user_id: agent.user_id,
            preset: agent.preset,
            persona: agent.persona,
            human: agent.human,
            llm_config,
            embedding_config,
            state: agent.state,
            created_at: to_unix_seconds(agent.created_at),
        })
    }
}
