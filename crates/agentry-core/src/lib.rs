//! Agentry Core
//!
//! This crate provides the agent listing and creation operations and the
//! collaborators they run against:
//! - The agent server abstraction and an in-memory implementation
//! - The output channel reset before every operation
//! - Caller identity resolution
//! - Translation of server agent state into the public response model

pub mod agents;
pub mod identity;
pub mod interface;

// Re-export key types for convenience
pub use agents::{
    AgentCreateConfig, AgentCreator, AgentList, AgentLister, AgentServer, AgentState,
    AgentStateView, AgentSummary, CreateAgentError, EmbeddingConfigModel, InMemoryAgentServer,
    LlmConfigModel, TranslationError,
};
pub use identity::{ApiKeyResolver, IdentityError, IdentityResolver, StaticResolver};
pub use interface::{OutputChannel, OutputKind, OutputMessage, QueuingInterface};
