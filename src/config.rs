//! Runtime configuration from the environment.
//!
//! An optional `.env` file is loaded first; real environment variables win.

use url::Url;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

pub const BIND_VAR: &str = "STUDIO_BIND";
pub const API_BASE_VAR: &str = "STUDIO_API_BASE";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {reason}")]
    InvalidUrl { var: &'static str, reason: String },

    #[error("{var} must use http or https, got {scheme}")]
    UnsupportedScheme { var: &'static str, scheme: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    /// Processing service base; always ends with `/` so endpoint paths join
    /// beneath it.
    pub api_base: Url,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get(BIND_VAR).unwrap_or_else(|| DEFAULT_BIND.to_string());
        let api_base = parse_api_base(&get(API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string()))?;

        Ok(Self {
            bind_addr,
            api_base,
        })
    }
}

fn parse_api_base(raw: &str) -> Result<Url, ConfigError> {
    let mut url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidUrl {
        var: API_BASE_VAR,
        reason: e.to_string(),
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::UnsupportedScheme {
            var: API_BASE_VAR,
            scheme: url.scheme().to_string(),
        });
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
