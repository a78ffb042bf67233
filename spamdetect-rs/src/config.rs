use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
    pub remote: RemoteConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub listen_addr: String,
}

/// Remote scoring backend. When unset or unreachable, classification
/// falls back to the local pattern engine.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteConfig {
    pub api_url: Option<String>,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::DetectError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::DetectError::Config(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                listen_addr: "0.0.0.0:5000".to_string(),
            },
            remote: RemoteConfig {
                api_url: None,
                timeout_secs: 5,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "pretty".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.listen_addr, "0.0.0.0:5000");
        assert!(config.remote.api_url.is_none());
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
            [server]
            listen_addr = "127.0.0.1:8080"

            [remote]
            api_url = "http://scoring.internal:5000"
            timeout_secs = 3

            [logging]
            level = "debug"
            format = "json"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.listen_addr, "127.0.0.1:8080");
        assert_eq!(
            config.remote.api_url.as_deref(),
            Some("http://scoring.internal:5000")
        );
        assert_eq!(config.remote.timeout_secs, 3);
        assert_eq!(config.logging.level, "debug");
    }
}
