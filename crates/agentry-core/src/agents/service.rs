//! Agent listing and creation
//!
//! Both operations clear the output channel before touching the server and
//! take the caller explicitly. Listing failures propagate untouched;
//! creation failures are logged and returned as [`CreateAgentError`].

use crate::agents::config::AgentCreateConfig;
use crate::agents::error::CreateAgentError;
use crate::agents::server::AgentServer;
use crate::agents::state::AgentList;
use crate::agents::view::AgentStateView;
use crate::interface::OutputChannel;
use agentry_common::CallerIdentity;
use anyhow::Error;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Lists the agents a caller owns
#[derive(Clone)]
pub struct AgentLister {
    server: Arc<dyn AgentServer>,
}

impl AgentLister {
    pub fn new(server: Arc<dyn AgentServer>) -> Self {
        Self { server }
    }

    pub async fn list(
        &self,
        output: &dyn OutputChannel,
        caller: CallerIdentity,
    ) -> Result<AgentList, Error> {
        output.clear();

        let agents = self.server.list_agents(caller).await?;
        debug!("Listing {} agents for {}", agents.len(), caller);
        Ok(AgentList::from(agents))
    }
}

/// Creates an agent and returns its public view.
///
/// Creation is all-or-nothing for the caller: if the new agent's state
/// cannot be translated, the agent is deleted again and the translation
/// failure is returned.
#[derive(Clone)]
pub struct AgentCreator {
    server: Arc<dyn AgentServer>,
}

impl AgentCreator {
    pub fn new(server: Arc<dyn AgentServer>) -> Self {
        Self { server }
    }

    pub async fn create(
        &self,
        output: &dyn OutputChannel,
        caller: CallerIdentity,
        payload: Map<String, Value>,
    ) -> Result<AgentStateView, CreateAgentError> {
        output.clear();

        let result = self.try_create(caller, payload).await;
        if let Err(e) = &result {
            error!("Failed to create agent for {}: {}", caller, e);
        }
        result
    }

    async fn try_create(
        &self,
        caller: CallerIdentity,
        payload: Map<String, Value>,
    ) -> Result<AgentStateView, CreateAgentError> {
        let config = AgentCreateConfig::from_payload(payload)?;

        let agent = self
            .server
            .create_agent(caller, config)
            .await
            .map_err(CreateAgentError::Server)?;
        let agent_id = agent.id;

        match AgentStateView::try_from(agent) {
            Ok(view) => {
                info!("Created agent {} ({}) for {}", view.name, view.id, caller);
                Ok(view)
            }
            Err(e) => {
                if let Err(cleanup) = self.server.delete_agent(caller, agent_id).await {
                    warn!(
                        "Could not remove untranslatable agent {}: {}",
                        agent_id, cleanup
                    );
                }
                Err(e.into())
            }
        }
    }
}
