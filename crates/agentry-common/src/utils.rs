//! Common utility functions used across Agentry components

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Generate a short ID for display purposes (8 characters)
pub fn generate_short_id() -> String {
    Uuid::new_v4().to_string()[..8].to_string()
}

/// Generate a name for an agent created without one
pub fn generate_agent_name() -> String {
    format!("agent-{}", generate_short_id())
}

/// Whole seconds since the Unix epoch. Sub-second precision is dropped.
pub fn to_unix_seconds(timestamp: DateTime<Utc>) -> i64 {
    timestamp.timestamp()
}

/// Extract the token from an `Authorization: Bearer <token>` header value
pub fn parse_bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_generated_names_are_unique() {
        let a = generate_agent_name();
        let b = generate_agent_name();
        assert!(a.starts_with("agent-"));
        assert_eq!(a.len(), "agent-".len() + 8);
        assert_ne!(a, b);
    }

    #[test]
    fn test_unix_seconds_truncates() {
        let ts = Utc.timestamp_opt(1_700_000_000, 999_000_000).unwrap();
        assert_eq!(to_unix_seconds(ts), 1_700_000_000);
    }

    #[test]
    fn test_parse_bearer_token() {
        assert_eq!(parse_bearer_token("Bearer abc123"), Some("abc123"));
        assert_eq!(parse_bearer_token("bearer   abc123 "), Some("abc123"));
        assert_eq!(parse_bearer_token("Basic abc123"), None);
        assert_eq!(parse_bearer_token("Bearer "), None);
        assert_eq!(parse_bearer_token("abc123"), None);
    }
}
