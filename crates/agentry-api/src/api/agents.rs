//! Agent API endpoints
//!
//! `GET /agents` lists the caller's agents, `POST /agents` creates one.
//! The caller is resolved from the `Authorization` header once per request.

use agentry_common::CallerIdentity;
use agentry_core::{
    AgentCreator, AgentList, AgentLister, AgentStateView, CreateAgentError, IdentityResolver,
    OutputChannel,
};
use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Json, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{info, warn};

/// Shared state for agent API endpoints
pub struct AgentApiState {
    pub lister: AgentLister,
    pub creator: AgentCreator,
    pub interface: Arc<dyn OutputChannel>,
    pub identity: Arc<dyn IdentityResolver>,
}

/// Body of `POST /agents`
#[derive(Debug, Deserialize)]
pub struct CreateAgentRequest {
    pub config: Map<String, Value>,
}

#[derive(Debug, Serialize)]
pub struct CreateAgentResponse {
    pub agent_state: AgentStateView,
}

/// Error body: `{"detail": "..."}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(serde_json::json!({ "detail": self.detail })),
        )
            .into_response()
    }
}

impl From<CreateAgentError> for ApiError {
    fn from(err: CreateAgentError) -> Self {
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

fn resolve_caller(state: &AgentApiState, headers: &HeaderMap) -> Result<CallerIdentity, ApiError> {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    state.identity.resolve(authorization).map_err(|e| {
        warn!("Rejected request: {}", e);
        ApiError::new(StatusCode::UNAUTHORIZED, e.to_string())
    })
}

/// List all agents owned by the caller
/// GET /agents
pub async fn list_agents(
    State(state): State<Arc<AgentApiState>>,
    headers: HeaderMap,
) -> Result<Json<AgentList>, Response> {
    let caller = resolve_caller(&state, &headers).map_err(IntoResponse::into_response)?;
    info!("Listing agents for {}", caller);

    state
        .lister
        .list(state.interface.as_ref(), caller)
        .await
        .map(Json)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response())
}

/// Create a new agent with the given configuration
/// POST /agents
pub async fn create_agent(
    State(state): State<Arc<AgentApiState>>,
    headers: HeaderMap,
    Json(request): Json<CreateAgentRequest>,
) -> Result<Json<CreateAgentResponse>, ApiError> {
    let caller = resolve_caller(&state, &headers)?;
    info!("Creating agent for {}", caller);

    let agent_state = state
        .creator
        .create(state.interface.as_ref(), caller, request.config)
        .await?;

    Ok(Json(CreateAgentResponse { agent_state }))
}

/// Create router for agent API endpoints
pub fn agent_routes(state: AgentApiState) -> Router {
    Router::new()
        .route("/agents", get(list_agents).post(create_agent))
        .with_state(Arc::new(state))
}
