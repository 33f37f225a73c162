//! Creation parameters accepted by `POST /agents`

use agentry_common::{EmbeddingConfig, LlmConfig};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Named parameters forwarded to [`AgentServer::create_agent`].
///
/// Every field is optional and filled by the server's defaults when left
/// out. Unknown keys are rejected.
///
/// [`AgentServer::create_agent`]: super::AgentServer::create_agent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentCreateConfig {
    pub name: Option<String>,
    pub preset: Option<String>,
    pub persona: Option<String>,
    pub human: Option<String>,
    pub llm_config: Option<LlmConfig>,
    pub embedding_config: Option<EmbeddingConfig>,
}

impl AgentCreateConfig {
    /// Parse the untyped `config` object of a creation request
    pub fn from_payload(payload: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(payload))
    }
}
