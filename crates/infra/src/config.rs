//! Configuration loading and representation.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

use catalog_observability::LogFormat;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

/// Runtime settings for the catalog service.
///
/// | variable | default |
/// |---|---|
/// | `CATALOG_BIND_ADDR` | `0.0.0.0:8080` |
/// | `CATALOG_SEED_PATH` | unset (empty catalog) |
/// | `CATALOG_LOG_FORMAT` | `json` (`json` or `pretty`) |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub bind_addr: SocketAddr,
    pub seed_path: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8080))),
            seed_path: None,
            log_format: LogFormat::Json,
        }
    }
}

impl CatalogConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        let read = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(addr) = read("CATALOG_BIND_ADDR") {
            cfg.bind_addr = addr.parse().map_err(|e| ConfigError::Invalid {
                key: "CATALOG_BIND_ADDR",
                message: format!("{addr:?}: {e}"),
            })?;
        }

        cfg.seed_path = read("CATALOG_SEED_PATH").map(PathBuf::from);

        if let Some(format) = read("CATALOG_LOG_FORMAT") {
            cfg.log_format = format.parse().map_err(|message| ConfigError::Invalid {
                key: "CATALOG_LOG_FORMAT",
                message,
            })?;
        }

        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let cfg = CatalogConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, CatalogConfig::default());
        assert_eq!(cfg.bind_addr.port(), 8080);
        assert!(cfg.seed_path.is_none());
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn reads_all_settings() {
        let cfg = CatalogConfig::from_lookup(lookup(&[
            ("CATALOG_BIND_ADDR", "127.0.0.1:9000"),
            ("CATALOG_SEED_PATH", "data/catalog.json"),
            ("CATALOG_LOG_FORMAT", "pretty"),
        ]))
        .unwrap();

        assert_eq!(cfg.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(cfg.seed_path, Some(PathBuf::from("data/catalog.json")));
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let cfg = CatalogConfig::from_lookup(lookup(&[("CATALOG_SEED_PATH", "  ")])).unwrap();
        assert!(cfg.seed_path.is_none());
    }

    #[test]
    fn rejects_bad_bind_addr() {
        let err = CatalogConfig::from_lookup(lookup(&[("CATALOG_BIND_ADDR", "not-an-addr")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "CATALOG_BIND_ADDR", .. }));
    }

    #[test]
    fn rejects_unknown_log_format() {
        let err = CatalogConfig::from_lookup(lookup(&[("CATALOG_LOG_FORMAT", "xml")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "CATALOG_LOG_FORMAT", .. }));
    }
}
