//! Agentry API server
//!
//! Serves `GET /agents` and `POST /agents` on top of an in-memory agent
//! server.

use std::path::PathBuf;
use std::sync::Arc;

use agentry_common::{CallerIdentity, ServerSettings};
use agentry_core::{
    AgentCreator, AgentLister, AgentServer, ApiKeyResolver, IdentityResolver,
    InMemoryAgentServer, QueuingInterface, StaticResolver,
};
use anyhow::{Result, anyhow};
use axum::Router;
use clap::Parser;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

mod api;

/// Command-line arguments for the Agentry API server
#[derive(Parser, Debug)]
#[clap(name = "agentry-api", about = "HTTP API for listing and creating agents")]
struct Args {
    /// Path to the TOML settings file
    #[clap(short, long, default_value = "agentry.toml")]
    config: PathBuf,

    /// Host to bind to (overrides the settings file)
    #[clap(long)]
    host: Option<String>,

    /// Port to listen on (overrides the settings file)
    #[clap(short, long)]
    port: Option<u16>,

    /// Log filter used when RUST_LOG is not set
    #[clap(long)]
    log_level: Option<String>,

    /// API key as <token>=<user-uuid>; may be repeated
    #[clap(long = "api-key", value_parser = parse_api_key)]
    api_keys: Vec<(String, Uuid)>,
}

fn parse_api_key(raw: &str) -> Result<(String, Uuid)> {
    let (token, user) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected <token>=<user-uuid>, got '{}'", raw))?;
    if token.is_empty() {
        return Err(anyhow!("API key token cannot be empty"));
    }
    Ok((token.to_string(), Uuid::parse_str(user)?))
}

/// Pick the identity resolver: API keys when any are configured, otherwise
/// single-user mode
fn build_resolver(settings: &ServerSettings) -> Arc<dyn IdentityResolver> {
    let keys = ApiKeyResolver::new(settings.api_keys.clone());
    if !keys.is_empty() {
        info!("Resolving callers from {} API keys", keys.len());
        return Arc::new(keys);
    }

    let user = settings.default_user.unwrap_or_else(Uuid::new_v4);
    warn!("No API keys configured; every request runs as user {}", user);
    Arc::new(StaticResolver::new(CallerIdentity::new(user)))
}

fn build_app(settings: &ServerSettings) -> Router {
    let server: Arc<dyn AgentServer> =
        Arc::new(InMemoryAgentServer::new(settings.defaults.clone()));

    let agent_api_state = api::agents::AgentApiState {
        lister: AgentLister::new(server.clone()),
        creator: AgentCreator::new(server),
        interface: Arc::new(QueuingInterface::new()),
        identity: build_resolver(settings),
    };

    Router::new()
        .merge(api::agents::agent_routes(agent_api_state))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut settings = ServerSettings::load(&args.config)?;
    if let Some(host) = args.host {
        settings.base.host = host;
    }
    if let Some(port) = args.port {
        settings.base.port = port;
    }
    if let Some(log_level) = args.log_level {
        settings.base.log_level = log_level;
    }
    settings.api_keys.extend(args.api_keys);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| settings.base.log_level.as_str().into());
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Agentry API server...");
    info!("Settings file: {:?}", args.config);

    let app = build_app(&settings);

    let addr = format!("{}:{}", settings.base.host, settings.base.port);
    info!("Binding to address: {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_api_key() {
        let user = Uuid::new_v4();
        let (token, parsed) = parse_api_key(&format!("sk-1={}", user)).unwrap();
        assert_eq!(token, "sk-1");
        assert_eq!(parsed, user);

        assert!(parse_api_key("sk-1").is_err());
        assert!(parse_api_key("=6a4b1c1e-3f5d-4a8e-9b0c-2d7e8f9a0b1c").is_err());
        assert!(parse_api_key("sk-1=not-a-uuid").is_err());
    }

    #[test]
    fn test_static_resolver_uses_default_user() {
        let user = Uuid::new_v4();
        let settings = ServerSettings {
            default_user: Some(user),
            ..Default::default()
        };

        let resolver = build_resolver(&settings);
        assert_eq!(resolver.resolve(None).unwrap().as_uuid(), user);
    }

    #[test]
    fn test_api_keys_take_precedence() {
        let mut settings = ServerSettings {
            default_user: Some(Uuid::new_v4()),
            ..Default::default()
        };
        settings.api_keys.insert("sk-1".to_string(), Uuid::new_v4());

        let resolver = build_resolver(&settings);
        assert!(resolver.resolve(None).is_err());
        assert!(resolver.resolve(Some("Bearer sk-1")).is_ok());
    }

    #[test]
    fn test_args_parse() {
        let user = Uuid::new_v4();
        let api_key = format!("sk-1={}", user);
        let args = Args::try_parse_from([
            "agentry-api",
            "--port",
            "9000",
            "--api-key",
            api_key.as_str(),
        ])
        .unwrap();
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.config, PathBuf::from("agentry.toml"));
        assert_eq!(args.api_keys, vec![("sk-1".to_string(), user)]);
    }
}
