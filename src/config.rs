use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::PollsError;

/// Runtime configuration. Values come from `POLLS_*` environment variables
/// layered over the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub listen_addr: String,
    pub loglevel: String,
    /// Maximum accepted request body, in bytes.
    pub body_limit: usize,
    /// Optional JSON file of polls loaded into the store at startup.
    pub seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8000".to_string(),
            loglevel: "info".to_string(),
            body_limit: 64 * 1024,
            seed_path: None,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed("POLLS_"))
    }

    pub fn load() -> Result<Self, PollsError> {
        Self::from_figment(Self::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<Self, PollsError> {
        Ok(figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_extract_cleanly() {
        let cfg = Config::from_figment(Figment::from(Serialized::defaults(Config::default())))
            .unwrap();
        assert_eq!(cfg, Config::default());
        assert!(cfg.seed_path.is_none());
    }

    #[test]
    fn overrides_layer_over_defaults() {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Serialized::default("body_limit", 1024))
            .merge(Serialized::default("seed_path", "/tmp/polls.json"));
        let cfg = Config::from_figment(figment).unwrap();

        assert_eq!(cfg.body_limit, 1024);
        assert_eq!(cfg.seed_path, Some(PathBuf::from("/tmp/polls.json")));
        assert_eq!(cfg.listen_addr, "0.0.0.0:8000");
    }

    #[test]
    fn bad_value_is_config_error() {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Serialized::default("body_limit", "lots"));
        let err = Config::from_figment(figment).unwrap_err();
        assert!(matches!(err, PollsError::Config(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
