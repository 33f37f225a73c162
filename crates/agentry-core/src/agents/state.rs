//! Agent state as produced by the agent server

use agentry_common::{EmbeddingConfig, LlmConfig};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Full state of an agent as the server holds it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    pub id: Uuid,
    pub name: String,
    /// Owner of the agent
    pub user_id: Uuid,
    pub preset: String,
    pub persona: String,
    pub human: String,
    pub llm_config: LlmConfig,
    pub embedding_config: EmbeddingConfig,
    /// Lifecycle tag, e.g. "created"
    pub state: String,
    pub created_at: DateTime<Utc>,
}

/// Configuration record returned when listing agents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentSummary {
    pub id: Uuid,
    pub name: String,
    pub preset: String,
    pub persona: String,
    pub human: String,
    pub state: String,
    /// RFC 3339 creation time
    pub created_at: String,
}

impl From<&AgentState> for AgentSummary {
    fn from(agent: &AgentState) -> Self {
        AgentSummary {
            id: agent.id,
            name: agent.name.clone(),
            preset: agent.preset.clone(),
            persona: agent.persona.clone(),
            human: agent.human.clone(),
            state: agent.state.clone(),
            created_at: agent.created_at.to_rfc3339(),
        }
    }
}

/// The caller's agents together with their count.
///
/// Only constructible from the agent sequence, so `num_agents` always
/// equals `agents.len()`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentList {
    num_agents: usize,
    agents: Vec<AgentSummary>,
}

impl AgentList {
    pub fn num_agents(&self) -> usize {
        self.num_agents
    }

    pub fn agents(&self) -> &[AgentSummary] {
        &self.agents
    }
}

impl From<Vec<AgentSummary>> for AgentList {
    fn from(agents: Vec<AgentSummary>) -> Self {
        AgentList {
            num_agents: agents.len(),
            agents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_state() -> AgentState {
        AgentState {
            id: Uuid::new_v4(),
            name: "a1".to_string(),
            user_id: Uuid::new_v4(),
            preset: "agentry_chat".to_string(),
            persona: "sam_pov".to_string(),
            human: "basic".to_string(),
            llm_config: LlmConfig::default(),
            embedding_config: EmbeddingConfig::default(),
            state: "created".to_string(),
            created_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        }
    }

    #[test]
    fn test_summary_copies_state_fields() {
        let state = sample_state();
        let summary = AgentSummary::from(&state);
        assert_eq!(summary.id, state.id);
        assert_eq!(summary.name, "a1");
        assert_eq!(summary.created_at, "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn test_agent_list_serializes_count_and_agents() {
        let state = sample_state();
        let list = AgentList::from(vec![AgentSummary::from(&state)]);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json["num_agents"], 1);
        assert_eq!(json["agents"].as_array().unwrap().len(), 1);
        assert_eq!(json["agents"][0]["name"], "a1");
    }
}
