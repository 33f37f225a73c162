//! Agent server abstraction and an in-memory implementation

use crate::agents::config::AgentCreateConfig;
use crate::agents::state::{AgentState, AgentSummary};
use agentry_common::{AGENT_STATE_CREATED, AgentDefaults, CallerIdentity, generate_agent_name};
use agentry_common::presets::KNOWN_PRESETS;
use anyhow::{Error, anyhow};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// Owner of agent lifecycle and persistence
#[async_trait]
pub trait AgentServer: Send + Sync {
    /// All agents owned by `user`, in the server's order
    async fn list_agents(&self, user: CallerIdentity) -> Result<Vec<AgentSummary>, Error>;

    /// Create and persist a new agent for `user`
    async fn create_agent(
        &self,
        user: CallerIdentity,
        config: AgentCreateConfig,
    ) -> Result<AgentState, Error>;

    /// Remove one of `user`'s agents
    async fn delete_agent(&self, user: CallerIdentity, agent_id: Uuid) -> Result<(), Error>;
}

/// Agent server keeping every agent in memory, grouped by owner
pub struct InMemoryAgentServer {
    defaults: AgentDefaults,
    presets: Vec<String>,
    agents: RwLock<HashMap<CallerIdentity, Vec<AgentState>>>,
}

impl InMemoryAgentServer {
    pub fn new(defaults: AgentDefaults) -> Self {
        let mut presets: Vec<String> = KNOWN_PRESETS.iter().map(|p| p.to_string()).collect();
        if !presets.contains(&defaults.preset) {
            presets.push(defaults.preset.clone());
        }

        InMemoryAgentServer {
            defaults,
            presets,
            agents: RwLock::new(HashMap::new()),
        }
    }

    /// Number of agents across all users
    pub async fn agent_count(&self) -> usize {
        let agents = self.agents.read().await;
        agents.values().map(Vec::len).sum()
    }
}

impl Default for InMemoryAgentServer {
    fn default() -> Self {
        Self::new(AgentDefaults::default())
    }
}

#[async_trait]
impl AgentServer for InMemoryAgentServer {
    async fn list_agents(&self, user: CallerIdentity) -> Result<Vec<AgentSummary>, Error> {
        let agents = self.agents.read().await;
        let summaries: Vec<AgentSummary> = agents
            .get(&user)
            .map(|owned| owned.iter().map(AgentSummary::from).collect())
            .unwrap_or_default();

        debug!("User {} has {} agents", user, summaries.len());
        Ok(summaries)
    }

    async fn create_agent(
        &self,
        user: CallerIdentity,
        config: AgentCreateConfig,
    ) -> Result<AgentState, Error> {
        let name = match config.name {
            Some(name) if name.trim().is_empty() => {
                return Err(anyhow!("Agent name cannot be empty"));
            }
            Some(name) => name,
            None => generate_agent_name(),
        };

        let preset = config.preset.unwrap_or_else(|| self.defaults.preset.clone());
        if !self.presets.contains(&preset) {
            return Err(anyhow!("invalid preset '{}'", preset));
        }

        let llm_config = config
            .llm_config
            .unwrap_or_default()
            .or(&self.defaults.llm_config);
        let embedding_config = config
            .embedding_config
            .unwrap_or_default()
            .or(&self.defaults.embedding_config);

        let mut agents = self.agents.write().await;
        let owned = agents.entry(user).or_default();
        if owned.iter().any(|agent| agent.name == name) {
            return Err(anyhow!("Agent with name '{}' already exists", name));
        }

        let agent = AgentState {
            id: Uuid::new_v4(),
            name,
            user_id: user.as_uuid(),
            preset,
            persona: config.persona.unwrap_or_else(|| self.defaults.persona.clone()),
            human: config.human.unwrap_or_else(|| self.defaults.human.clone()),
            llm_config,
            embedding_config,
            state: AGENT_STATE_CREATED.to_string(),
            created_at: Utc::now(),
        };
        owned.push(agent.clone());

        info!("Created agent {} ({}) for user {}", agent.name, agent.id, user);
        Ok(agent)
    }

    async fn delete_agent(&self, user: CallerIdentity, agent_id: Uuid) -> Result<(), Error> {
        let mut agents = self.agents.write().await;
        let owned = agents
            .get_mut(&user)
            .ok_or_else(|| anyhow!("Agent {} not found", agent_id))?;

        let position = owned
            .iter()
            .position(|agent| agent.id == agent_id)
            .ok_or_else(|| anyhow!("Agent {} not found", agent_id))?;
        owned.remove(position);

        debug!("Deleted agent {} for user {}", agent_id, user);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentry_common::LlmConfig;

    fn caller() -> CallerIdentity {
        CallerIdentity::new(Uuid::new_v4())
    }

    fn named(name: &str) -> AgentCreateConfig {
        AgentCreateConfig {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_create_applies_defaults() {
        let server = InMemoryAgentServer::default();
        let user = caller();

        let agent = server.create_agent(user, named("a1")).await.unwrap();
        assert_eq!(agent.name, "a1");
        assert_eq!(agent.user_id, user.as_uuid());
        assert_eq!(agent.preset, "agentry_chat");
        assert_eq!(agent.persona, "sam_pov");
        assert_eq!(agent.human, "basic");
        assert_eq!(agent.state, "created");
        assert_eq!(agent.llm_config.model.as_deref(), Some("gpt-4"));
        assert_eq!(agent.embedding_config.embedding_dim, Some(1536));
    }

    #[tokio::test]
    async fn test_create_merges_partial_llm_config() {
        let server = InMemoryAgentServer::default();
        let config = AgentCreateConfig {
            llm_config: Some(LlmConfig {
                model: Some("gpt-4o".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let agent = server.create_agent(caller(), config).await.unwrap();
        assert!(agent.name.starts_with("agent-"));
        assert_eq!(agent.llm_config.model.as_deref(), Some("gpt-4o"));
        assert_eq!(agent.llm_config.context_window, Some(8192));
    }

    #[tokio::test]
    async fn test_create_rejects_unknown_preset() {
        let server = InMemoryAgentServer::default();
        let config = AgentCreateConfig {
            preset: Some("nope".to_string()),
            ..Default::default()
        };

        let err = server.create_agent(caller(), config).await.unwrap_err();
        assert_eq!(err.to_string(), "invalid preset 'nope'");
        assert_eq!(server.agent_count().await, 0);
    }

    #[tokio::test]
    async fn test_custom_default_preset_is_accepted() {
        let defaults = AgentDefaults {
            preset: "house_style".to_string(),
            ..Default::default()
        };
        let server = InMemoryAgentServer::new(defaults);

        let agent = server.create_agent(caller(), named("a1")).await.unwrap();
        assert_eq!(agent.preset, "house_style");
    }

    #[tokio::test]
    async fn test_duplicate_name_is_per_user() {
        let server = InMemoryAgentServer::default();
        let (alice, bob) = (caller(), caller());

        server.create_agent(alice, named("a1")).await.unwrap();
        let err = server.create_agent(alice, named("a1")).await.unwrap_err();
        assert!(err.to_string().contains("already exists"));

        server.create_agent(bob, named("a1")).await.unwrap();
        assert_eq!(server.agent_count().await, 2);
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected() {
        let server = InMemoryAgentServer::default();
        assert!(server.create_agent(caller(), named("  ")).await.is_err());
    }

    #[tokio::test]
    async fn test_list_is_scoped_and_ordered() {
        let server = InMemoryAgentServer::default();
        let (alice, bob) = (caller(), caller());

        for name in ["first", "second", "third"] {
            server.create_agent(alice, named(name)).await.unwrap();
        }
        server.create_agent(bob, named("other")).await.unwrap();

        let listed = server.list_agents(alice).await.unwrap();
        let names: Vec<&str> = listed.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);

        assert!(server.list_agents(caller()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_agent() {
        let server = InMemoryAgentServer::default();
        let user = caller();
        let agent = server.create_agent(user, named("a1")).await.unwrap();

        assert!(server.delete_agent(caller(), agent.id).await.is_err());
        server.delete_agent(user, agent.id).await.unwrap();
        assert!(server.list_agents(user).await.unwrap().is_empty());
        assert!(server.delete_agent(user, agent.id).await.is_err());
    }
}
