//! Server configuration loaded from environment variables.

/// Default port, shared with the agent server tooling.
pub const DEFAULT_PORT: u16 = 8087;

const DEFAULT_HOST: &str = "127.0.0.1";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address (from MODERNIZER_HOST)
    pub host: String,
    /// Port (from MODERNIZER_PORT, falling back to AGENT_SERVER_PORT)
    pub port: u16,
    /// Allowed CORS origins (from MODERNIZER_CORS_ORIGINS, comma-separated).
    /// `None` allows any origin.
    pub cors_origins: Option<Vec<String>>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("MODERNIZER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = lookup("MODERNIZER_PORT")
            .and_then(|s| parse_port("MODERNIZER_PORT", &s))
            .or_else(|| {
                lookup("AGENT_SERVER_PORT").and_then(|s| parse_port("AGENT_SERVER_PORT", &s))
            })
            .unwrap_or(DEFAULT_PORT);

        let cors_origins = lookup("MODERNIZER_CORS_ORIGINS").map(|s| {
            s.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        Self {
            host,
            port,
            cors_origins,
        }
    }

    /// Override the port, e.g. from a CLI flag.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_port(key: &str, value: &str) -> Option<u16> {
    match value.trim().parse::<u16>() {
        Ok(port) => Some(port),
        Err(_) => {
            tracing::warn!("Ignoring invalid {} '{}'", key, value);
            None
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_origins: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        assert_eq!(config_from(&[]), ServerConfig::default());
    }

    #[test]
    fn modernizer_port_wins_over_agent_server_port() {
        let config = config_from(&[("MODERNIZER_PORT", "9000"), ("AGENT_SERVER_PORT", "9001")]);
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn falls_back_to_agent_server_port() {
        let config = config_from(&[("AGENT_SERVER_PORT", "9001")]);
        assert_eq!(config.port, 9001);
    }

    #[test]
    fn invalid_port_uses_default() {
        let config = config_from(&[("MODERNIZER_PORT", "not-a-port")]);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn invalid_modernizer_port_falls_back_to_agent_server_port() {
        let config = config_from(&[("MODERNIZER_PORT", "eighty"), ("AGENT_SERVER_PORT", "9001")]);
        assert_eq!(config.port, 9001);
    }

    #[test]
    fn splits_cors_origins() {
        let config = config_from(&[(
            "MODERNIZER_CORS_ORIGINS",
            "http://localhost:3000, https://example.com,",
        )]);
        assert_eq!(
            config.cors_origins,
            Some(vec![
                "http://localhost:3000".to_string(),
                "https://example.com".to_string()
            ])
        );
    }

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = ServerConfig::default().with_port(3000);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }
}
