//! Configuration management for bolacli.
//!
//! This module handles loading configuration values from environment
//! variables and `.env` files into one [`Config`] value, built once at startup
//! and handed to the components that need it. The API client receives its
//! [`ApiConfig`] at construction.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (everything except the API key)

use std::{env, fmt, path::PathBuf, time::Duration};

use reqwest::Url;

pub const API_KEY_VAR: &str = "API_FOOTBALL_KEY";
pub const API_URL_VAR: &str = "API_FOOTBALL_URL";
pub const LEAGUE_VAR: &str = "API_FOOTBALL_LEAGUE";
pub const SEASONS_VAR: &str = "API_FOOTBALL_SEASONS";
pub const TIMEOUT_VAR: &str = "API_FOOTBALL_TIMEOUT_SECS";
pub const FAVORITES_FILE_VAR: &str = "BOLACLI_FAVORITES_FILE";
pub const FLOODS_FILE_VAR: &str = "BOLACLI_FLOODS_FILE";

pub const DEFAULT_API_URL: &str = "https://v3.football.api-sports.io";
/// Brasileirão Feminino.
pub const DEFAULT_LEAGUE: u32 = 74;
pub const DEFAULT_SEASONS: &[&str] = &["2021", "2022", "2023"];
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the directory structure if it doesn't exist and loads variables
/// from `bolacli/.env` under the platform-specific local data directory:
/// - Linux: `~/.local/share/bolacli/.env`
/// - macOS: `~/Library/Application Support/bolacli/.env`
/// - Windows: `%LOCALAPPDATA%/bolacli/.env`
///
/// A missing `.env` file is fine; the variables may come from the process
/// environment instead.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the directory where bolacli keeps its files.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("bolacli");
    path
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "{} must be set", var),
            ConfigError::Invalid { var, value } => {
                write!(f, "{} has an invalid value: '{}'", var, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Connection settings for the statistics service.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Sent as `x-rapidapi-host`; derived from the base url.
    pub host: String,
    pub key: String,
    pub timeout: Duration,
}

impl ApiConfig {
    pub fn new(base_url: &str, key: &str, timeout: Duration) -> Result<Self, ConfigError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let host = Url::parse(&base_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .ok_or_else(|| ConfigError::Invalid {
                var: API_URL_VAR,
                value: base_url.clone(),
            })?;

        Ok(Self {
            base_url,
            host,
            key: key.to_string(),
            timeout,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// `None` when no API key is configured; only the lookups need it.
    pub api: Option<ApiConfig>,
    pub league: u32,
    /// Seasons offered in the lookup menu.
    pub seasons: Vec<String>,
    pub favorites_path: PathBuf,
    pub floods_path: PathBuf,
}

impl Config {
    /// Builds the configuration from the process environment.
    ///
    /// Call [`load_env`] first so values from the `.env` file are visible.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Returns the API settings or the error naming the missing key.
    pub fn api(&self) -> Result<&ApiConfig, ConfigError> {
        self.api.as_ref().ok_or(ConfigError::Missing(API_KEY_VAR))
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let key = get(API_KEY_VAR);
        let base_url = get(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = match get(TIMEOUT_VAR) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Invalid {
                    var: TIMEOUT_VAR,
                    value,
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let league = match get(LEAGUE_VAR) {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::Invalid {
                    var: LEAGUE_VAR,
                    value,
                })?,
            None => DEFAULT_LEAGUE,
        };

        let seasons = match get(SEASONS_VAR) {
            Some(value) => {
                let seasons: Vec<String> = value
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if seasons.is_empty() {
                    return Err(ConfigError::Invalid {
                        var: SEASONS_VAR,
                        value,
                    });
                }
                seasons
            }
            None => DEFAULT_SEASONS.iter().map(|s| s.to_string()).collect(),
        };

        let favorites_path = get(FAVORITES_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir().join("favorites.json"));
        let floods_path = get(FLOODS_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir().join("floods.json"));

        let api = match key {
            Some(key) => Some(ApiConfig::new(
                &base_url,
                &key,
                Duration::from_secs(timeout_secs),
            )?),
            None => None,
        };

        Ok(Self {
            api,
            league,
            seasons,
            favorites_path,
            floods_path,
        })
    }
}
