//! Server settings read from the environment (and `.env` in development).

use std::env;

const DEFAULT_LOG_FILTER: &str = "info,support3=debug";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be a boolean flag, got {value:?}")]
    InvalidFlag { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub log_filter: String,
    pub production: bool,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_filter = lookup("RUST_LOG")
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.into());

        let production = match lookup("PRODUCTION") {
            None => false,
            Some(value) => parse_flag("PRODUCTION", value)?,
        };

        Ok(Self {
            log_filter,
            production,
        })
    }
}

fn parse_flag(name: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(!config.production);
    }

    #[test]
    fn reads_flags_and_filter() {
        let config =
            ServerConfig::from_lookup(lookup(&[("RUST_LOG", "warn"), ("PRODUCTION", "True")]))
                .unwrap();
        assert_eq!(config.log_filter, "warn");
        assert!(config.production);
    }

    #[test]
    fn rejects_garbage_flag() {
        let err = ServerConfig::from_lookup(lookup(&[("PRODUCTION", "maybe")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidFlag {
                name: "PRODUCTION",
                value: "maybe".into()
            }
        );
    }
}
