// src/config/mod.rs
// Runtime configuration: environment > ~/.uplink/config.toml > defaults

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::warn;

use crate::llm::provider::{gemini, openai};
use crate::prompt::DEFAULT_HISTORY_WINDOW;

/// Placeholder some deployments ship instead of a real key
const PLACEHOLDER_KEY: &str = "mock-key";

/// Optional overrides read from the config file
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    pub gemini_api_key: Option<String>,
    pub gemini_model: Option<String>,
    pub gemini_base_url: Option<String>,
    pub openai_api_key: Option<String>,
    pub openai_model: Option<String>,
    pub openai_base_url: Option<String>,
    pub history_window: Option<usize>,
    pub provider_timeout_secs: Option<u64>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub cors_origin: Option<String>,
}

impl FileConfig {
    /// Load from ~/.uplink/config.toml; a missing file means no overrides
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

/// Directory holding config.toml and an optional .env
pub fn config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_default().join(".uplink")
}

pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

#[derive(Clone)]
pub struct UplinkConfig {
    // ── Primary provider
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,

    // ── Secondary provider
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,

    // ── Resolution
    pub history_window: usize,
    pub provider_timeout_secs: u64,

    // ── Server
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
}

impl UplinkConfig {
    pub fn from_env() -> Self {
        Self::resolve(|key| std::env::var(key).ok(), FileConfig::load())
    }

    /// Merge an environment lookup over file values over defaults
    pub fn resolve<F>(env: F, file: FileConfig) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            gemini_api_key: credential(env(gemini::CREDENTIAL_ENV).or(file.gemini_api_key)),
            gemini_model: setting(&env, "UPLINK_GEMINI_MODEL", file.gemini_model, gemini::DEFAULT_MODEL.to_string()),
            gemini_base_url: setting(&env, "UPLINK_GEMINI_BASE_URL", file.gemini_base_url, gemini::DEFAULT_BASE_URL.to_string()),

            openai_api_key: credential(env(openai::CREDENTIAL_ENV).or(file.openai_api_key)),
            openai_model: setting(&env, "UPLINK_OPENAI_MODEL", file.openai_model, openai::DEFAULT_MODEL.to_string()),
            openai_base_url: setting(&env, "UPLINK_OPENAI_BASE_URL", file.openai_base_url, openai::DEFAULT_BASE_URL.to_string()),

            history_window: setting(&env, "UPLINK_HISTORY_WINDOW", file.history_window, DEFAULT_HISTORY_WINDOW),
            provider_timeout_secs: setting(&env, "UPLINK_PROVIDER_TIMEOUT_SECS", file.provider_timeout_secs, 20),

            host: setting(&env, "UPLINK_HOST", file.host, "127.0.0.1".to_string()),
            port: setting(&env, "UPLINK_PORT", file.port, 3000),
            cors_origin: setting(&env, "UPLINK_CORS_ORIGIN", file.cors_origin, "*".to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for UplinkConfig {
    fn default() -> Self {
        Self::resolve(|_| None, FileConfig::default())
    }
}

impl fmt::Debug for UplinkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UplinkConfig")
            .field("gemini_api_key", &self.gemini_api_key.as_ref().map(|_| "<set>"))
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "<set>"))
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("history_window", &self.history_window)
            .field("provider_timeout_secs", &self.provider_timeout_secs)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cors_origin", &self.cors_origin)
            .finish()
    }
}

/// Strip inline comments and surrounding whitespace
fn clean(raw: &str) -> &str {
    raw.split('#').next().unwrap_or("").trim()
}

fn credential(raw: Option<String>) -> Option<String> {
    raw.map(|v| clean(&v).to_string())
        .filter(|v| !v.is_empty() && v != PLACEHOLDER_KEY)
}

fn setting<T, F>(env: &F, key: &str, file: Option<T>, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = env(key) {
        let value = clean(&raw);
        match value.parse::<T>() {
            Ok(parsed) => return parsed,
            Err(_) => warn!("Config: {} = '{}' (parse failed, ignoring)", key, raw),
        }
    }
    file.unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = UplinkConfig::default();
        assert!(config.gemini_api_key.is_none());
        assert!(config.openai_api_key.is_none());
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.openai_model, "gpt-4o-mini");
        assert_eq!(config.history_window, 10);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_placeholder_and_blank_keys_disable_provider() {
        let config = UplinkConfig::resolve(
            env_of(&[("OPENAI_API_KEY", "mock-key"), ("GOOGLE_GENERATIVE_AI_API_KEY", "   ")]),
            FileConfig::default(),
        );
        assert!(config.openai_api_key.is_none());
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn test_env_overrides_file() {
        let file = FileConfig {
            port: Some(8080),
            history_window: Some(6),
            openai_api_key: Some("file-key".into()),
            ..Default::default()
        };
        let config = UplinkConfig::resolve(
            env_of(&[("UPLINK_PORT", "9000 # local"), ("OPENAI_API_KEY", "env-key")]),
            file,
        );
        assert_eq!(config.port, 9000);
        assert_eq!(config.history_window, 6);
        assert_eq!(config.openai_api_key.as_deref(), Some("env-key"));
    }

    #[test]
    fn test_unparseable_value_falls_back() {
        let config = UplinkConfig::resolve(env_of(&[("UPLINK_PORT", "not-a-port")]), FileConfig::default());
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = UplinkConfig::resolve(env_of(&[("OPENAI_API_KEY", "sk-secret")]), FileConfig::default());
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("sk-secret"));
        assert!(rendered.contains("<set>"));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "gemini_api_key = \"g-key\"\nport = 4100\n").unwrap();

        let file = FileConfig::load_from(&path);
        assert_eq!(file.gemini_api_key.as_deref(), Some("g-key"));
        assert_eq!(file.port, Some(4100));

        let missing = FileConfig::load_from(&dir.path().join("absent.toml"));
        assert!(missing.port.is_none());
    }

    #[test]
    fn test_malformed_file_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "port = [not valid").unwrap();
        assert!(FileConfig::load_from(&path).port.is_none());
    }
}
