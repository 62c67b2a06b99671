//! Process configuration: required environment values plus the static YAML file.
//!
//! Everything is read and validated once at startup. Missing keys are reported
//! together so a broken deployment shows the whole list in one go.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const STATIC_CONFIG_PATH: &str = "configs/static.yaml";

pub const ENV_LISTING_DB: &str = "LISTING_DB";
pub const ENV_WEBDRIVER_HOST: &str = "WEBDRIVER_HOST";
pub const ENV_WEBDRIVER_PORT: &str = "WEBDRIVER_PORT";
pub const ENV_APP_PORT: &str = "APP_PORT";

const REQUIRED_KEYS: [&str; 4] = [
    ENV_LISTING_DB,
    ENV_WEBDRIVER_HOST,
    ENV_WEBDRIVER_PORT,
    ENV_APP_PORT,
];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("invalid value for {key}: {value:?} is not a port number")]
    InvalidPort { key: &'static str, value: String },

    #[error("failed to read static config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse static config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct WebDriverConfig {
    pub host: String,
    pub port: u16,
}

impl WebDriverConfig {
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}/wd/hub", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaticConfig {
    pub templates: TemplatesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TemplatesConfig {
    pub dir: PathBuf,
    pub listings: String,
    #[serde(default)]
    pub stylesheet: Option<String>,
}

impl StaticConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(raw: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(raw)
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub webdriver: WebDriverConfig,
    pub app_port: u16,
    pub static_config: StaticConfig,
}

impl AppConfig {
    /// Reads the process environment (after `.env`, if any) and the static file.
    pub fn from_env(static_path: &Path) -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "Loaded .env");
        }
        let static_config = StaticConfig::load(static_path)?;
        Self::from_lookup(|key| std::env::var(key).ok(), static_config)
    }

    /// Builds the config from any key lookup. Empty values count as missing.
    pub fn from_lookup<F>(lookup: F, static_config: StaticConfig) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let missing: Vec<&'static str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let value = |key: &'static str| get(key).unwrap_or_default();

        Ok(Self {
            store: StoreConfig {
                path: PathBuf::from(value(ENV_LISTING_DB)),
            },
            webdriver: WebDriverConfig {
                host: value(ENV_WEBDRIVER_HOST),
                port: parse_port(ENV_WEBDRIVER_PORT, &value(ENV_WEBDRIVER_PORT))?,
            },
            app_port: parse_port(ENV_APP_PORT, &value(ENV_APP_PORT))?,
            static_config,
        })
    }
}

fn parse_port(key: &'static str, raw: &str) -> Result<u16, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidPort {
        key,
        value: raw.to_string(),
    })
}
