//! Agent module
//!
//! Listing and creation of agents on top of an [`AgentServer`].

pub mod config;
pub mod error;
pub mod server;
pub mod service;
pub mod state;
pub mod view;

pub use config::AgentCreateConfig;
pub use error::CreateAgentError;
pub use server::{AgentServer, InMemoryAgentServer};
pub use service::{AgentCreator, AgentLister};
pub use state::{AgentList, AgentState, AgentSummary};
pub use view::{AgentStateView, EmbeddingConfigModel, LlmConfigModel, TranslationError};
