//! Service configuration

use serde::{Deserialize, Serialize};

use crate::error::{CLTError, CLTResult};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8086;

/// Bind address of the HTTP service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Read `CLT_HOST` and `CLT_PORT`, falling back to the defaults
    pub fn from_env() -> CLTResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> CLTResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("CLT_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("CLT_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|e| CLTError::InvalidInput(format!("CLT_PORT '{raw}': {e}")))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.address(), "0.0.0.0:8086");
    }

    #[test]
    fn test_overrides() {
        let config =
            ServerConfig::from_lookup(lookup(&[("CLT_HOST", "127.0.0.1"), ("CLT_PORT", "9000")]))
                .unwrap();
        assert_eq!(config.address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[("CLT_PORT", "http")])).unwrap_err();
        assert!(matches!(err, CLTError::InvalidInput(_)));
    }
}
