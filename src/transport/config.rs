use std::time::Duration;

/// Default endpoint, the backend's well-known local address
pub const DEFAULT_ENDPOINT: &str = "ws://localhost:8000/ws";

/// Environment variable overriding the endpoint
pub const ENDPOINT_ENV_VAR: &str = "CREWBOARD_WS_URL";

/// Connection settings for the transport adapter
#[derive(Debug, Clone)]
pub struct TransportConfig {
    pub endpoint: String,
    pub reconnect: ReconnectConfig,
}

impl TransportConfig {
    /// Creates a config for the given endpoint with default reconnection
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            reconnect: ReconnectConfig::default(),
        }
    }

    /// Reads the endpoint from the environment, falling back to the
    /// well-known local address
    pub fn from_env() -> Self {
        let endpoint = std::env::var(ENDPOINT_ENV_VAR).unwrap_or_else(|_| {
            tracing::warn!("{} not set, using default", ENDPOINT_ENV_VAR);
            DEFAULT_ENDPOINT.to_string()
        });
        Self::new(endpoint)
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

/// Bounded exponential backoff between connection attempts
///
/// The delay doubles from `initial_ms` up to `max_ms`; after
/// `max_attempts` consecutive failures the adapter stays disconnected
/// and the response simulator remains the fallback path.
#[derive(Debug, Clone)]
pub struct ReconnectConfig {
    pub max_attempts: u32,
    pub initial_ms: u64,
    pub max_ms: u64,
}

impl ReconnectConfig {
    /// Returns the delay to wait before the given attempt (1-based)
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        let delay = self
            .initial_ms
            .saturating_mul(1u64 << exponent)
            .min(self.max_ms);
        Duration::from_millis(delay)
    }
}

impl Default for ReconnectConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_ms: 500,
            max_ms: 8_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_until_capped() {
        let config = ReconnectConfig::default();

        assert_eq!(config.backoff_for(1), Duration::from_millis(500));
        assert_eq!(config.backoff_for(2), Duration::from_millis(1_000));
        assert_eq!(config.backoff_for(3), Duration::from_millis(2_000));
        assert_eq!(config.backoff_for(10), Duration::from_millis(8_000));
    }

    #[test]
    fn backoff_is_bounded_for_huge_attempt_numbers() {
        let config = ReconnectConfig::default();

        assert_eq!(config.backoff_for(u32::MAX), Duration::from_millis(8_000));
    }

    #[test]
    fn default_endpoint_matches_backend_address() {
        assert_eq!(TransportConfig::default().endpoint, "ws://localhost:8000/ws");
    }
}
