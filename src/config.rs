//! Configuration management for yt-lookup.
//!
//! Handles loading and saving configuration from JSONC files and resolving
//! the YouTube API key from the environment, the config file, or the value
//! captured at build time.

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable consulted for the API key, at runtime and at build time.
pub const API_KEY_ENV: &str = "YT_LOOKUP_API_KEY";

/// Placeholder shipped in the example config; treated as "not configured".
pub const PLACEHOLDER_API_KEY: &str = "YOUR_YOUTUBE_API_KEY";

/// Default YouTube Data API v3 endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

const APP_DIR: &str = "yt-lookup";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// YouTube Data API v3 key
    pub api_key: String,
    /// Base URL of the YouTube Data API
    pub api_base_url: String,
    /// Number of results requested per keyword search
    pub max_results: u32,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
    /// Log file path (relative to config dir or absolute)
    pub log_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            max_results: 10,
            request_timeout_secs: 30,
            log_path: "yt-lookup.log".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/yt-lookup/config.jsonc`
    /// 3. `~/.config/yt-lookup/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&strip_line_comments(&content))
            .with_context(|| "Failed to deserialize config")?;

        Ok(config)
    }

    /// Save configuration to file.
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            Self::default_config_path()?
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - `$XDG_CONFIG_HOME/yt-lookup/config.jsonc` or
    ///   `~/.config/yt-lookup/config.jsonc`
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir =
            config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
        Ok(config_dir.join(APP_DIR).join("config.jsonc"))
    }

    /// Get log file path.
    ///
    /// # Details
    /// If log_path is absolute, returns it as-is.
    /// Otherwise, returns path relative to config directory.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        let log_path = Path::new(&self.log_path);
        if log_path.is_absolute() {
            Ok(log_path.to_path_buf())
        } else {
            let config_dir = config_dir()
                .ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
            Ok(config_dir.join(APP_DIR).join(&self.log_path))
        }
    }

    /// Resolve the API key to use for requests.
    ///
    /// # Returns
    /// * `Option<String>` - The key, or `None` when no source holds a usable one
    ///
    /// # Details
    /// Sources in order: the `YT_LOOKUP_API_KEY` environment variable, the
    /// `api_key` field, then `YT_LOOKUP_API_KEY` as seen at build time.
    /// Blank values and [`PLACEHOLDER_API_KEY`] are skipped.
    pub fn resolved_api_key(&self) -> Option<String> {
        let runtime = env::var(API_KEY_ENV).ok();
        resolve_api_key([
            runtime.as_deref(),
            Some(self.api_key.as_str()),
            option_env!("YT_LOOKUP_API_KEY"),
        ])
    }
}

/// First candidate that is neither blank nor the placeholder.
fn resolve_api_key<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
        .map(str::to_owned)
}

/// Strip `//` comments that are not inside a string literal.
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| match comment_start(line) {
            Some(pos) => line[..pos].trim_end(),
            None => line,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Byte offset of the first `//` outside a string, honoring `\"` escapes.
fn comment_start(line: &str) -> Option<usize> {
    let bytes = line.as_bytes();
    let mut in_string = false;
    let mut escaped = false;
    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
        } else if b == b'"' {
            in_string = true;
        } else if b == b'/' && bytes.get(i + 1) == Some(&b'/') {
            return Some(i);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_empty());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.max_results, 10);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let config = Config {
            api_key: "test_key".to_string(),
            max_results: 5,
            ..Config::default()
        };

        config.save(Some(&config_path)).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.api_key, "test_key");
        assert_eq!(loaded.max_results, 5);
    }

    #[test]
    fn test_config_jsonc_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let jsonc_content = r#"{
            // API key for YouTube Data API v3
            "api_key": "test_key", // personal key
            // local mirror
            "api_base_url": "http://localhost:8080/youtube/v3"
        }"#;

        fs::write(&config_path, jsonc_content).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.api_key, "test_key");
        assert_eq!(loaded.api_base_url, "http://localhost:8080/youtube/v3");
        assert_eq!(loaded.request_timeout_secs, 30);
    }

    #[test]
    fn test_config_trailing_comment_after_url() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let jsonc_content = r#"{
            "api_key": "key//with\"slashes", // quoted slashes stay
            "api_base_url": "http://localhost:8080/youtube/v3" // local mirror
        }"#;

        fs::write(&config_path, jsonc_content).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded.api_key, "key//with\"slashes");
        assert_eq!(loaded.api_base_url, "http://localhost:8080/youtube/v3");
    }

    #[test]
    fn test_strip_line_comments() {
        assert_eq!(strip_line_comments("// whole line"), "");
        assert_eq!(
            strip_line_comments(r#""a": "x//y", // note"#),
            r#""a": "x//y","#
        );
        assert_eq!(
            strip_line_comments(r#""a": "\\" // backslash"#),
            r#""a": "\\""#
        );
        assert_eq!(strip_line_comments("\"a\": 1\n\"b\": 2"), "\"a\": 1\n\"b\": 2");
    }

    #[test]
    fn test_config_missing_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load(Some(&temp_dir.path().join("missing.jsonc"))).unwrap();
        assert!(loaded.api_key.is_empty());
    }

    #[test]
    fn test_resolve_api_key_order() {
        assert_eq!(
            resolve_api_key([Some("env_key"), Some("file_key"), None]).as_deref(),
            Some("env_key")
        );
        assert_eq!(
            resolve_api_key([None, Some(" file_key "), Some("build_key")]).as_deref(),
            Some("file_key")
        );
        assert_eq!(
            resolve_api_key([Some(""), Some(PLACEHOLDER_API_KEY), Some("build_key")]).as_deref(),
            Some("build_key")
        );
    }

    #[test]
    fn test_resolve_api_key_unconfigured() {
        assert_eq!(resolve_api_key([None, Some("   "), None]), None);
        assert_eq!(resolve_api_key([None, Some(PLACEHOLDER_API_KEY), None]), None);
    }
}
