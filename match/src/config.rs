use crate::error::ConfigError;
use log::warn;
use serde_derive::Deserialize;
use std::path::Path;

/// Runtime settings for an `Exchange`
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ExchangeConfig {
    /// Whether market orders that find no liquidity rest in a market queue
    pub allow_market_queue: bool,
    /// Number of price levels reported by depth snapshots
    pub depth: usize,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ExchangeConfig {
    pub fn new() -> Self {
        ExchangeConfig {
            allow_market_queue: true,
            depth: 5,
        }
    }

    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Loads the config at `path`, falling back to defaults when the file is
    /// missing or malformed.
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Something went wrong reading the exchange config file {}, {}",
                    path.as_ref().display(),
                    e
                );
                ExchangeConfig::new()
            }
        }
    }
}
