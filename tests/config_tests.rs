use inventory_assistant::{
    Error,
    config::{self, Config},
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

mod common;

use common::test_utils::{INVALID_CONFIG_YAML, SAMPLE_CONFIG_YAML};

#[tokio::test]
async fn test_load_file_parses_yaml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    tokio::fs::write(&path, SAMPLE_CONFIG_YAML).await.unwrap();

    let config = config::load_file(&path, true).await.unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 5000);
    assert_eq!(config.server.logs.level, "debug");
    assert_eq!(config.llm.base_url, "http://localhost:9999/v1");
    assert_eq!(config.llm.model, "gpt-4.1-mini");
    assert_eq!(config.llm.temperature, Some(0.2));
    assert_eq!(config.llm.request_timeout_secs, Some(60));
    assert!(config.assistant.keyword_shortcut);
    assert!(config.validate().is_ok());
}

#[tokio::test]
async fn test_missing_optional_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");

    let config = config::load_file(&path, false).await.unwrap();

    assert_eq!(config.server.port, 8080);
    assert_eq!(config.llm.model, "gpt-4-1106-preview");
}

#[tokio::test]
async fn test_missing_required_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.yaml");

    let err = config::load_file(&path, true).await.unwrap_err();

    assert!(matches!(err, Error::Io(_)));
}

#[tokio::test]
async fn test_invalid_yaml_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    tokio::fs::write(&path, INVALID_CONFIG_YAML).await.unwrap();

    let err = config::load_file(&path, true).await.unwrap_err();

    assert!(matches!(err, Error::Yaml(_)));
}

#[test]
fn test_env_overrides_beat_file_values() {
    let mut config = config::from_yaml_str(SAMPLE_CONFIG_YAML).unwrap();

    config
        .apply_env_overrides(|key| match key {
            "OPENAI_API_KEY" => Some("sk-from-env".to_string()),
            "OPENAI_BASE_URL" => Some("https://proxy.internal/v1".to_string()),
            "HOST" => Some("0.0.0.0".to_string()),
            "KEYWORD_SHORTCUT" => Some("off".to_string()),
            _ => None,
        })
        .unwrap();

    assert_eq!(config.llm.api_key, "sk-from-env");
    assert_eq!(config.llm.base_url, "https://proxy.internal/v1");
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 5000);
    assert!(!config.assistant.keyword_shortcut);
}

#[test]
fn test_default_config_fails_validation() {
    let err = Config::default().validate().unwrap_err();
    assert!(err.to_string().contains("OPENAI_API_KEY"));
}
