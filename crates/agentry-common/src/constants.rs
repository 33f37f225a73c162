//! Common constants used across Agentry

/// Default bind address for the API server
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port for the API server
pub const DEFAULT_PORT: u16 = 8283;

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Lifecycle tag assigned to a freshly created agent
pub const AGENT_STATE_CREATED: &str = "created";

/// Default agent presets, personas and human profiles
pub mod presets {
    pub const DEFAULT_PRESET: &str = "agentry_chat";
    pub const DEFAULT_PERSONA: &str = "sam_pov";
    pub const DEFAULT_HUMAN: &str = "basic";

    /// Presets the in-memory server knows how to build
    pub const KNOWN_PRESETS: &[&str] = &["agentry_chat", "agentry_docs", "agentry_extralong"];
}

/// Language model defaults
pub mod llm {
    pub const DEFAULT_MODEL: &str = "gpt-4";
    pub const DEFAULT_ENDPOINT_TYPE: &str = "openai";
    pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";
    pub const DEFAULT_CONTEXT_WINDOW: u32 = 8192;
}

/// Embedding defaults
pub mod embedding {
    pub const DEFAULT_ENDPOINT_TYPE: &str = "openai";
    pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";
    pub const DEFAULT_MODEL: &str = "text-embedding-ada-002";
    pub const DEFAULT_DIM: u32 = 1536;
    pub const DEFAULT_CHUNK_SIZE: u32 = 300;
}
