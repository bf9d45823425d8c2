use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use crate::extract::DEFAULT_DELAY;

const DEFAULT_BIND: &str = "0.0.0.0:8000";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("RECIPE_API_BIND is not a socket address: {0}")]
    InvalidBind(String),
    #[error("RECIPE_API_DELAY_MS is not a number of milliseconds: {0}")]
    InvalidDelay(String),
    #[error("RECIPE_API_TOKENS entry must look like uid:token, got {0:?}")]
    InvalidToken(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub delay: Duration,
    /// token -> uid
    pub tokens: HashMap<String, String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup("RECIPE_API_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBind(bind_raw.clone()))?;

        let delay = match lookup("RECIPE_API_DELAY_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidDelay(raw))?,
            None => DEFAULT_DELAY,
        };

        let tokens = match lookup("RECIPE_API_TOKENS") {
            Some(raw) => parse_tokens(&raw)?,
            None => HashMap::new(),
        };

        Ok(Self {
            bind,
            delay,
            tokens,
        })
    }
}

fn parse_tokens(raw: &str) -> Result<HashMap<String, String>, ConfigError> {
    let mut tokens = HashMap::new();
    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (uid, token) = entry
            .split_once(':')
            .map(|(u, t)| (u.trim(), t.trim()))
            .filter(|(u, t)| !u.is_empty() && !t.is_empty())
            .ok_or_else(|| ConfigError::InvalidToken(entry.to_string()))?;
        tokens.insert(token.to_string(), uid.to_string());
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.bind, "0.0.0.0:8000".parse().unwrap());
        assert_eq!(config.delay, Duration::from_millis(1500));
        assert!(config.tokens.is_empty());
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("RECIPE_API_BIND", "127.0.0.1:9090"),
            ("RECIPE_API_DELAY_MS", "0"),
            ("RECIPE_API_TOKENS", "alice:a-token, bob:b-token,"),
        ]))
        .unwrap();
        assert_eq!(config.bind.port(), 9090);
        assert_eq!(config.delay, Duration::ZERO);
        assert_eq!(config.tokens.get("a-token").map(String::as_str), Some("alice"));
        assert_eq!(config.tokens.get("b-token").map(String::as_str), Some("bob"));
    }

    #[test]
    fn rejects_malformed_values() {
        assert_eq!(
            Config::from_lookup(lookup(&[("RECIPE_API_DELAY_MS", "soon")])).unwrap_err(),
            ConfigError::InvalidDelay("soon".to_string())
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("RECIPE_API_BIND", "localhost")])).unwrap_err(),
            ConfigError::InvalidBind("localhost".to_string())
        );
        assert_eq!(
            Config::from_lookup(lookup(&[("RECIPE_API_TOKENS", "alice")])).unwrap_err(),
            ConfigError::InvalidToken("alice".to_string())
        );
        assert!(Config::from_lookup(lookup(&[("RECIPE_API_TOKENS", "alice:")])).is_err());
    }
}
