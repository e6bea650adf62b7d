//! Loads config from config.toml

use serde_derive::Deserialize;
use std::fs;
use std::io;
use thiserror::Error;
use toml;

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub graphql: GraphqlConfig
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
    pub log: bool,

    pub request_quota_replenish_ms: u64,
    pub request_quota: u32
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            ip: "127.0.0.1".to_string(),
            port: 8080,
            log: true,
            request_quota_replenish_ms: 100,
            request_quota: 50
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct GraphqlConfig {
    pub path: String,
    pub playground: bool
}

impl Default for GraphqlConfig {
    fn default() -> Self {
        GraphqlConfig {
            path: "/graphql".to_string(),
            playground: true
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read {path}, please create or ensure it's accessible")]
    Read { path: String, source: io::Error },
    #[error("Unable to load data from config: {0}")]
    Parse(#[from] toml::de::Error)
}

impl Config {
    pub fn load(path: &str) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_string(), source })?;
        Config::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Config, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}
