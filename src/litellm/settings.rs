//! Provider settings resolution from multiple sources

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::config::{env, settings as settings_config};
use crate::error::{ProviderError, Result};

/// Connection settings for the management API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub api_base: String,
    pub api_key: String,
    /// Development-only: disables TLS certificate validation
    #[serde(default)]
    pub insecure_skip_verify: bool,
}

/// Settings file contents; every field optional
#[derive(Debug, Default, Deserialize)]
struct SettingsFile {
    api_base: Option<String>,
    api_key: Option<String>,
    insecure_skip_verify: Option<bool>,
}

/// Settings resolution with fallback logic
pub struct SettingsResolver {
    path: Option<PathBuf>,
}

impl Default for SettingsResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsResolver {
    /// Resolver reading the default settings file (~/.litellm-provider/config.json)
    pub fn new() -> Self {
        Self {
            path: dirs::home_dir().map(|home| {
                home.join(settings_config::DIR_NAME)
                    .join(settings_config::FILE_NAME)
            }),
        }
    }

    /// Resolver reading a custom settings file (for testing)
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Resolve settings from multiple sources with fallback:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (LITELLM_API_BASE, LITELLM_API_KEY,
    ///    LITELLM_INSECURE_SKIP_VERIFY)
    /// 3. Settings file
    pub fn resolve(
        &self,
        cli_api_base: Option<&str>,
        cli_api_key: Option<&str>,
        cli_insecure: bool,
    ) -> Result<ProviderSettings> {
        self.resolve_with(cli_api_base, cli_api_key, cli_insecure, |name| {
            std::env::var(name).ok()
        })
    }

    /// Same as [`resolve`](Self::resolve) with an injectable environment lookup
    pub fn resolve_with<F>(
        &self,
        cli_api_base: Option<&str>,
        cli_api_key: Option<&str>,
        cli_insecure: bool,
        lookup_env: F,
    ) -> Result<ProviderSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = self.read_file()?;

        let api_base = pick(
            "API base",
            cli_api_base,
            lookup_env(env::API_BASE),
            file.api_base,
        )
        .ok_or_else(|| {
            ProviderError::Config(missing_message("API base URL", "--api-base", env::API_BASE))
        })?;
        let api_key = pick("API key", cli_api_key, lookup_env(env::API_KEY), file.api_key)
            .ok_or_else(|| {
                ProviderError::Config(missing_message("API key", "--api-key", env::API_KEY))
            })?;

        let insecure_skip_verify = cli_insecure
            || lookup_env(env::INSECURE_SKIP_VERIFY)
                .map(|v| parse_flag(&v))
                .or(file.insecure_skip_verify)
                .unwrap_or(false);

        if insecure_skip_verify {
            warn!("TLS certificate verification is disabled; use only for development");
        }

        Ok(ProviderSettings {
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            insecure_skip_verify,
        })
    }

    fn read_file(&self) -> Result<SettingsFile> {
        let Some(path) = self.path.as_ref().filter(|p| p.exists()) else {
            return Ok(SettingsFile::default());
        };

        debug!("Reading provider settings from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| {
            ProviderError::Config(format!(
                "Failed to read settings file {}: {}",
                path.display(),
                e
            ))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            ProviderError::Config(format!(
                "Failed to parse settings file {}: {}",
                path.display(),
                e
            ))
        })
    }
}

fn pick(
    what: &str,
    cli: Option<&str>,
    env_value: Option<String>,
    file_value: Option<String>,
) -> Option<String> {
    if let Some(value) = cli.filter(|v| !v.is_empty()) {
        debug!("Using {} from CLI argument", what);
        return Some(value.to_string());
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        debug!("Using {} from environment", what);
        return Some(value);
    }
    file_value.filter(|v| !v.is_empty()).inspect(|_| {
        debug!("Using {} from settings file", what);
    })
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

fn missing_message(what: &str, flag: &str, env_var: &str) -> String {
    format!(
        "No {} configured. Provide it using one of:\n\
         \n\
         1. CLI argument:      litellm-provider {} <VALUE>\n\
         2. Environment var:   export {}=<VALUE>\n\
         3. Settings file:     ~/{}/{}",
        what,
        flag,
        env_var,
        settings_config::DIR_NAME,
        settings_config::FILE_NAME
    )
}
