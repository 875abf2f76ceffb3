//! Runtime configuration read from the environment (and `.env` via dotenvy).
//!
//! - `HOST`: bind host (default `127.0.0.1`)
//! - `PORT`: bind port (default `8000`; unparsable values fall back to it)
//! - `STATIC_DIR`: directory served under `/static` (default `static`)

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: lookup("HOST")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.port),
            static_dir: lookup("STATIC_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
        }
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        Self::parse_addr(&self.host, self.port)
    }

    /// Next port up, tried once when the configured port is taken.
    pub fn fallback_addr(&self) -> Result<SocketAddr> {
        let port = self
            .port
            .checked_add(1)
            .context("no fallback port above 65535")?;
        Self::parse_addr(&self.host, port)
    }

    fn parse_addr(host: &str, port: u16) -> Result<SocketAddr> {
        format!("{}:{}", host, port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", host, port))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        assert_eq!(config_from(&[]), AppConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[("HOST", "0.0.0.0"), ("PORT", "9090"), ("STATIC_DIR", "/srv/www")]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9090);
        assert_eq!(config.static_dir, PathBuf::from("/srv/www"));
        assert_eq!(config.bind_addr().unwrap().to_string(), "0.0.0.0:9090");
        assert_eq!(config.fallback_addr().unwrap().port(), 9091);
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        let config = config_from(&[("PORT", "eighty")]);
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn unparsable_host_is_an_error() {
        let config = config_from(&[("HOST", "not a host")]);
        assert!(config.bind_addr().is_err());
    }

    #[test]
    fn no_fallback_above_max_port() {
        let config = config_from(&[("PORT", "65535")]);
        assert!(config.fallback_addr().is_err());
    }
}
