use std::time::Duration;

use url::Url;

use crate::errors::{FeederError, FeederResult};

pub const DEFAULT_API_URL: &str = "https://api.rss2json.com/v1/api.json";
pub const DEFAULT_REFRESH_SECS: u64 = 300;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Url,
    pub refresh_interval: Duration,
    pub request_timeout: Duration,
    pub output_path: Option<String>,
}

impl Config {
    /// Get the directory where the executable is located
    fn exe_dir() -> Option<std::path::PathBuf> {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    pub fn from_env() -> FeederResult<Self> {
        // Try to load .env from executable's directory first
        if let Some(dir) = Self::exe_dir() {
            let env_path = dir.join(".env");
            if env_path.exists() {
                dotenvy::from_path(&env_path).ok();
            }
        }
        // Fall back to current directory
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> FeederResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_api_url = lookup("FEEDER_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&raw_api_url)
            .map_err(|e| FeederError::Config(format!("FEEDER_API_URL: {}", e)))?;

        let refresh_secs = parse_positive_secs(&lookup, "FEEDER_REFRESH_SECS", DEFAULT_REFRESH_SECS)?;
        let timeout_secs = parse_positive_secs(&lookup, "FEEDER_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;

        let output_path = lookup("FEEDER_OUTPUT_PATH").filter(|p| !p.trim().is_empty());

        Ok(Self {
            api_url,
            refresh_interval: Duration::from_secs(refresh_secs),
            request_timeout: Duration::from_secs(timeout_secs),
            output_path,
        })
    }
}

fn parse_positive_secs<F>(lookup: &F, key: &str, default: u64) -> FeederResult<u64>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(FeederError::Config(format!(
            "{} must be a positive number of seconds, got '{}'",
            key, raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
        assert_eq!(config.refresh_interval, Duration::from_secs(300));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.output_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("FEEDER_API_URL", "http://localhost:9000/convert"),
            ("FEEDER_REFRESH_SECS", "60"),
            ("FEEDER_TIMEOUT_SECS", "5"),
            ("FEEDER_OUTPUT_PATH", "/tmp/feeds.html"),
        ]))
        .unwrap();

        assert_eq!(config.api_url.as_str(), "http://localhost:9000/convert");
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.output_path.as_deref(), Some("/tmp/feeds.html"));
    }

    #[test]
    fn test_rejects_zero_interval() {
        let result = Config::from_lookup(lookup_from(&[("FEEDER_REFRESH_SECS", "0")]));
        assert!(matches!(result, Err(FeederError::Config(_))));
    }

    #[test]
    fn test_rejects_relative_api_url() {
        let result = Config::from_lookup(lookup_from(&[("FEEDER_API_URL", "api.json")]));
        assert!(matches!(result, Err(FeederError::Config(_))));
    }
}
