//! Application configuration loaded from environment variables.
//!
//! Every variable carries the [`ENV_PREFIX`] prefix (`APP_HOST`, `APP_PORT`, ...).
//! Shells such as tcsh export a bare `HOST=<hostname>`, which must not leak
//! into the bind address.

use std::net::{IpAddr, SocketAddr};

use serde::Deserialize;

use crate::error::Result;

/// Prefix shared by all configuration variables.
pub const ENV_PREFIX: &str = "APP_";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    // === Server Configuration ===
    /// Interface the HTTP listener binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// HTTP listener port.
    #[serde(default = "default_port")]
    pub port: u16,

    // === Logging ===
    /// Log filter directive, e.g. `info` or `whatsapp_api_middleware=debug,info`.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit log lines as JSON instead of plain text.
    #[serde(default)]
    pub log_json: bool,

    /// Enable verbose logging.
    #[serde(default)]
    pub verbose: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_json: false,
            verbose: false,
        }
    }
}

impl Config {
    /// Load configuration from environment, reading .env file first.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Build configuration from an explicit set of `(NAME, value)` pairs.
    /// Names without [`ENV_PREFIX`] are ignored.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Ok(envy::prefixed(ENV_PREFIX).from_iter(vars)?)
    }

    /// Check if the configuration is valid.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.host.parse::<IpAddr>().is_err() {
            return Err(format!("APP_HOST must be an IP address, got {:?}", self.host));
        }

        if self.port == 0 {
            return Err("APP_PORT must be non-zero".to_string());
        }

        Ok(())
    }

    /// Address the HTTP listener binds to.
    pub fn socket_addr(&self) -> std::result::Result<SocketAddr, String> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| format!("invalid APP_HOST {:?}: {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn default_values_are_sensible() {
        let config = Config::from_vars(Vec::new()).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert!(!config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn environment_overrides_defaults() {
        let config = Config::from_vars(vars(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "9000"),
            ("APP_LOG_JSON", "true"),
            ("APP_LOG_LEVEL", "debug"),
        ]))
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert!(config.log_json);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9000");
    }

    #[test]
    fn unprefixed_shell_variables_are_ignored() {
        let config = Config::from_vars(vars(&[
            ("HOST", "workstation.local"),
            ("PORT", "1"),
            ("RUST_LOG", "trace"),
        ]))
        .unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_numeric_port_fails_to_load() {
        let err = Config::from_vars(vars(&[("APP_PORT", "http")])).unwrap_err();
        assert!(matches!(err, ServiceError::Config(_)));
    }

    #[test]
    fn validate_rejects_hostname() {
        let config = Config {
            host: "localhost".to_string(),
            ..Config::default()
        };

        assert!(config.validate().is_err());
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn validate_rejects_zero_port() {
        let config = Config {
            port: 0,
            ..Config::default()
        };

        assert!(config.validate().is_err());
    }
}
