mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads `.env`, then the YAML file, then environment overrides.
///
/// A missing `config.yaml` falls back to defaults; a missing file named
/// explicitly through `CONFIG_PATH` is an error.
pub async fn load() -> Result<Config> {
    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from: {}", path.display());
    }

    let explicit_path = env::var("CONFIG_PATH").ok();
    let required = explicit_path.is_some();
    let config_path = explicit_path.unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let mut config = load_file(Path::new(&config_path), required).await?;

    config.apply_env_overrides(|key| env::var(key).ok())?;
    config.validate()?;

    Ok(config)
}

/// Reads a YAML config file. When `required` is false a missing file yields defaults.
pub async fn load_file(path: &Path, required: bool) -> Result<Config> {
    debug!("Loading configuration from: {}", path.display());

    match tokio::fs::read_to_string(path).await {
        Ok(config_str) => from_yaml_str(&config_str),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
            debug!("No {} found, using defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn from_yaml_str(config_str: &str) -> Result<Config> {
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

impl Config {
    /// Overlays values found through `lookup` (normally the process environment).
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup("OPENAI_API_KEY") {
            self.llm.api_key = api_key;
        }
        if let Some(base_url) = lookup("OPENAI_BASE_URL") {
            self.llm.base_url = base_url;
        }
        if let Some(model) = lookup("OPENAI_MODEL") {
            self.llm.model = model;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::config(format!("Invalid PORT: '{}'", port)))?;
        }
        if let Some(flag) = lookup("KEYWORD_SHORTCUT") {
            self.assistant.keyword_shortcut = parse_flag(&flag)
                .ok_or_else(|| Error::config(format!("Invalid KEYWORD_SHORTCUT: '{}'", flag)))?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            return Err(Error::config(
                "OPENAI_API_KEY is not set (environment, .env or llm.api_key)",
            ));
        }
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("llm.model must not be empty"));
        }
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
