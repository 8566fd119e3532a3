use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the comparison service. May be left empty here and
    /// supplied via COMPARE_API_BASE instead; the client constructors are
    /// the enforcement point.
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub offset: u32,
}

fn default_limit() -> u32 {
    50
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(config)
    }

    /// Base URL with the env override applied. Deliberately no error here:
    /// an empty result fails at client construction, before any network
    /// attempt.
    pub fn base_url(&self) -> String {
        match EnvConfig::load().api_base {
            Some(base) => base,
            None => self.api.base_url.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub api_base: Option<String>,
}

impl EnvConfig {
    pub fn load() -> Self {
        dotenv::dotenv().ok();

        Self {
            api_base: std::env::var("COMPARE_API_BASE").ok(),
        }
    }
}
