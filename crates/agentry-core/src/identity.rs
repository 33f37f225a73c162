//! Caller identity resolution
//!
//! A resolver turns the request's `Authorization` header into a
//! [`CallerIdentity`]. It runs once per request; the identity is then passed
//! explicitly into the agent operations.

use agentry_common::{CallerIdentity, parse_bearer_token};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// No `Authorization` header was sent
    MissingCredentials,
    /// The header is not of the form `Bearer <token>`
    MalformedCredentials,
    /// The token does not belong to any user
    UnknownToken,
}

impl fmt::Display for IdentityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentityError::MissingCredentials => write!(f, "Missing bearer token"),
            IdentityError::MalformedCredentials => {
                write!(f, "Authorization header must be 'Bearer <token>'")
            }
            IdentityError::UnknownToken => write!(f, "Invalid API key"),
        }
    }
}

impl std::error::Error for IdentityError {}

/// Pluggable identity resolution
pub trait IdentityResolver: Send + Sync {
    /// Resolve the caller from the raw `Authorization` header value, if any
    fn resolve(&self, authorization: Option<&str>) -> Result<CallerIdentity, IdentityError>;
}

/// Resolves bearer tokens against a fixed key table
#[derive(Debug, Clone, Default)]
pub struct ApiKeyResolver {
    keys: HashMap<String, CallerIdentity>,
}

impl ApiKeyResolver {
    pub fn new(keys: HashMap<String, Uuid>) -> Self {
        Self {
            keys: keys
                .into_iter()
                .map(|(token, user)| (token, CallerIdentity::new(user)))
                .collect(),
        }
    }

    pub fn insert(&mut self, token: impl Into<String>, user: CallerIdentity) {
        self.keys.insert(token.into(), user);
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl IdentityResolver for ApiKeyResolver {
    fn resolve(&self, authorization: Option<&str>) -> Result<CallerIdentity, IdentityError> {
        let header = authorization.ok_or(IdentityError::MissingCredentials)?;
        let token = parse_bearer_token(header).ok_or(IdentityError::MalformedCredentials)?;

        match self.keys.get(token) {
            Some(user) => {
                debug!("Resolved caller {}", user);
                Ok(*user)
            }
            None => Err(IdentityError::UnknownToken),
        }
    }
}

/// Single-user mode: every request is the same caller
#[derive(Debug, Clone, Copy)]
pub struct StaticResolver {
    user: CallerIdentity,
}

impl StaticResolver {
    pub fn new(user: CallerIdentity) -> Self {
        Self { user }
    }
}

impl IdentityResolver for StaticResolver {
    fn resolve(&self, _authorization: Option<&str>) -> Result<CallerIdentity, IdentityError> {
        Ok(self.user)
    }
}
