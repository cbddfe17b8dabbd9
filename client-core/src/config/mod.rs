//! Client configuration: backend base URL and request timeout.
//!
//! Resolution order mirrors the deployed frontend: a `.env` file (current
//! directory, then the executable's directory), then the process
//! environment, then the compiled-in default.

use crate::DASHBOARD_API_DEFAULT_BASE_URL;
use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::env;
use std::time::Duration;

use log::{debug, info, warn};
use url::Url;

/// Environment variable overriding the backend base URL.
pub const API_URL_ENV_VAR: &str = "DASHBOARD_API_URL";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DASHBOARD_API_DEFAULT_BASE_URL)
                .expect("valid default base URL"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Build a config from `.env` and the process environment, falling
    /// back to the default base URL when nothing is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !try_load_dotenv() {
            debug!("No .env file found - will check existing environment variables");
        }

        match env::var(API_URL_ENV_VAR) {
            Ok(raw) => {
                let base_url = parse_base_url(&raw)?;
                info!("Using API base URL from {API_URL_ENV_VAR}");
                Ok(Self {
                    base_url,
                    timeout: DEFAULT_TIMEOUT,
                })
            }
            Err(env::VarError::NotPresent) => {
                debug!("{API_URL_ENV_VAR} not set, using default base URL");
                Ok(Self::default())
            }
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::Environment {
                reason: format!("{API_URL_ENV_VAR} contains invalid unicode"),
                location: ErrorLocation::caller(),
            }),
        }
    }

    /// Build a config pointing at an explicit base URL.
    pub fn with_base_url(raw: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(raw)?,
            timeout: DEFAULT_TIMEOUT,
        })
    }
}

/// Parse and normalize a base URL. A missing trailing slash is corrected
/// because `Url::join` would otherwise drop the final path segment when
/// endpoints are joined on.
fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::ValidationError {
            reason: String::from("base URL is empty"),
            location: ErrorLocation::caller(),
        });
    }

    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };

    Url::parse(&normalized).map_err(|error| ConfigError::ValidationError {
        reason: format!("invalid base URL '{trimmed}': {error}"),
        location: ErrorLocation::caller(),
    })
}

/// Attempts to load .env from known locations. Returns whether any .env
/// file was loaded; the winning path is logged here.
fn try_load_dotenv() -> bool {
    // Try current directory first
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return true;
    }

    // Try executable directory
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let env_path = exe_dir.join(".env");
            if env_path.exists() {
                match dotenvy::from_path(&env_path) {
                    Ok(_) => {
                        info!("Loaded .env from: {:?}", env_path);
                        return true;
                    }
                    Err(error) => {
                        warn!("Failed to parse .env at {:?}: {}", env_path, error);
                    }
                }
            }
        }
    }

    false
}
