// src/config.rs
//
// Engine configuration. Loaded from an optional JSON file with every
// field defaulting sensibly; the base URL can also come from the
// MOVIEHUB_API_URL environment variable (which wins over the file).

use std::path::Path;
use std::time::Duration;
use std::{env, fs};

use serde::Deserialize;

use crate::infrastructure::RetryPolicy;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;
const DEFAULT_DEBOUNCE_MS: u64 = 350;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Catalog service root, e.g. "http://localhost:5000/api"
    pub base_url: String,
    pub request_timeout: Duration,
    /// Debounce window for the live search field
    pub debounce: Duration,
    /// Retry policy for the trending feed; other feeds never retry
    pub trending_retry: RetryPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            trending_retry: RetryPolicy::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    base_url: Option<String>,
    request_timeout_secs: Option<u64>,
    debounce_ms: Option<u64>,
    trending_retry_attempts: Option<u32>,
    trending_retry_backoff_ms: Option<u64>,
}

/// Load configuration from `path`, falling back to defaults when the
/// file is absent or unparseable. A malformed file is never fatal.
pub fn load_config(path: &Path) -> EngineConfig {
    let mut cfg = EngineConfig::default();

    match fs::read_to_string(path) {
        Ok(raw) => match serde_json::from_str::<RawConfig>(&raw) {
            Ok(parsed) => {
                if let Some(base_url) = parsed.base_url {
                    cfg.base_url = base_url;
                }
                if let Some(secs) = parsed.request_timeout_secs {
                    cfg.request_timeout = Duration::from_secs(secs);
                }
                if let Some(ms) = parsed.debounce_ms {
                    cfg.debounce = Duration::from_millis(ms);
                }
                if let Some(attempts) = parsed.trending_retry_attempts {
                    cfg.trending_retry.attempts = attempts.max(1);
                }
                if let Some(ms) = parsed.trending_retry_backoff_ms {
                    cfg.trending_retry.backoff = Duration::from_millis(ms);
                }
                log::info!("Loaded config from {}", path.display());
            }
            Err(err) => {
                log::warn!("Failed to parse {} ({}). Using defaults.", path.display(), err);
            }
        },
        Err(_) => {
            log::info!("No config file at {}; using defaults", path.display());
        }
    }

    if let Ok(base_url) = env::var("MOVIEHUB_API_URL") {
        if !base_url.trim().is_empty() {
            cfg.base_url = base_url;
        }
    }

    cfg
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_yields_defaults() {
        let cfg = load_config(Path::new("/nonexistent/config.json"));
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
        assert_eq!(cfg.debounce, Duration::from_millis(DEFAULT_DEBOUNCE_MS));
        assert_eq!(cfg.trending_retry.attempts, 3);
    }

    #[test]
    fn test_partial_file_overrides_only_named_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"base_url": "https://movies.example/api", "debounce_ms": 400}}"#
        )
        .unwrap();

        let cfg = load_config(file.path());
        assert_eq!(cfg.base_url, "https://movies.example/api");
        assert_eq!(cfg.debounce, Duration::from_millis(400));
        assert_eq!(
            cfg.request_timeout,
            Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let cfg = load_config(file.path());
        assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_retry_attempts_floor_at_one() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"trending_retry_attempts": 0}}"#).unwrap();

        let cfg = load_config(file.path());
        assert_eq!(cfg.trending_retry.attempts, 1);
    }
}
