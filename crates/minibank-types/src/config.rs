//! Service configuration.

use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::{BankError, Result, constants};

/// Log output format for the binary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable `fmt` output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Some(Self::Pretty),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Configuration for a MiniBank process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Address the HTTP API listens on.
    pub listen_addr: SocketAddr,
    /// Log output format.
    pub log_format: LogFormat,
    /// Whether to load the five fixture accounts at startup.
    pub seed_accounts: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], constants::DEFAULT_API_PORT)),
            log_format: LogFormat::Pretty,
            seed_accounts: true,
        }
    }
}

impl ServiceConfig {
    /// Read `HOST`, `PORT`, `LOG_FORMAT` and `SEED_ACCOUNTS` from the process
    /// environment. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        let host = lookup("HOST").unwrap_or_else(|| constants::DEFAULT_HOST.to_string());
        let ip: IpAddr = host
            .trim()
            .parse()
            .map_err(|_| BankError::Configuration(format!("HOST is not an IP address: {host}")))?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| BankError::Configuration(format!("PORT is not a valid port: {raw}")))?,
            None => constants::DEFAULT_API_PORT,
        };
        cfg.listen_addr = SocketAddr::new(ip, port);

        if let Some(raw) = lookup("LOG_FORMAT") {
            cfg.log_format = LogFormat::parse(&raw).ok_or_else(|| {
                BankError::Configuration(format!("LOG_FORMAT must be pretty or json: {raw}"))
            })?;
        }

        if let Some(raw) = lookup("SEED_ACCOUNTS") {
            cfg.seed_accounts = parse_bool(&raw).ok_or_else(|| {
                BankError::Configuration(format!("SEED_ACCOUNTS must be a boolean: {raw}"))
            })?;
        }

        Ok(cfg)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = ServiceConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, ServiceConfig::default());
        assert_eq!(cfg.listen_addr.port(), 3000);
        assert!(cfg.seed_accounts);
    }

    #[test]
    fn reads_all_keys() {
        let cfg = ServiceConfig::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
            ("LOG_FORMAT", "JSON"),
            ("SEED_ACCOUNTS", "off"),
        ]))
        .unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:8081".parse().unwrap());
        assert_eq!(cfg.log_format, LogFormat::Json);
        assert!(!cfg.seed_accounts);
    }

    #[test]
    fn bad_port_is_configuration_error() {
        let err = ServiceConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
        assert!(matches!(err, BankError::Configuration(ref m) if m.contains("PORT")));
    }

    #[test]
    fn bad_host_and_format_rejected() {
        assert!(ServiceConfig::from_lookup(lookup_from(&[("HOST", "localhost")])).is_err());
        assert!(ServiceConfig::from_lookup(lookup_from(&[("LOG_FORMAT", "xml")])).is_err());
        assert!(ServiceConfig::from_lookup(lookup_from(&[("SEED_ACCOUNTS", "maybe")])).is_err());
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = ServiceConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: ServiceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
