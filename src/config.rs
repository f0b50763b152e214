//! Service configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Table names are intentionally not
//! validated at startup — a missing table name surfaces as a logged
//! persistence failure at call time, never as a boot failure.

use std::net::SocketAddr;

/// Persistence write policy for queue mutations.
///
/// The original service awaited some queue writes and fired-and-forgot
/// others; here the behavior is a single explicit policy so tests can
/// deterministically assert persistence completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WritePolicy {
    /// Persist inline before the response is produced.
    #[default]
    Awaited,
    /// Persist on a detached task; the response does not wait for it.
    Detached,
}

impl std::str::FromStr for WritePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "awaited" => Ok(Self::Awaited),
            "detached" => Ok(Self::Detached),
            other => Err(format!("unknown write policy: {other}")),
        }
    }
}

/// Top-level service configuration.
///
/// Loaded once at startup via [`ServiceConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8080`).
    pub listen_addr: SocketAddr,

    /// AWS region override. When unset the SDK's default provider chain
    /// resolves the region.
    pub aws_region: Option<String>,

    /// DynamoDB table holding one queue record per place.
    pub queue_table: String,

    /// DynamoDB table holding immutable match result records.
    pub match_table: String,

    /// Place key used for the startup queue load and as the fallback when
    /// a request omits `place`.
    pub default_place: String,

    /// Policy for persisting queue mutations.
    pub write_policy: WritePolicy,
}

impl ServiceConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()?;

        let aws_region = std::env::var("AWS_REGION").ok();

        let queue_table = std::env::var("QUEUE_TABLE").unwrap_or_default();
        let match_table = std::env::var("MATCH_TABLE").unwrap_or_default();

        let default_place = parse_env("DEFAULT_PLACE", "default".to_string());
        let write_policy = parse_env("WRITE_POLICY", WritePolicy::default());

        Ok(Self {
            listen_addr,
            aws_region,
            queue_table,
            match_table,
            default_place,
            write_policy,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_policy_parses_known_values() {
        assert_eq!("awaited".parse(), Ok(WritePolicy::Awaited));
        assert_eq!("DETACHED".parse(), Ok(WritePolicy::Detached));
        assert!("later".parse::<WritePolicy>().is_err());
    }

    #[test]
    fn write_policy_defaults_to_awaited() {
        assert_eq!(WritePolicy::default(), WritePolicy::Awaited);
    }
}
