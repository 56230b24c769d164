use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// CSV feed loaded into the job store at startup.
    pub jobs_csv: Option<PathBuf>,
    /// Upper bound on candidate jobs fetched for one matching pass.
    pub job_fetch_limit: usize,
    pub max_upload_mb: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            jobs_csv: None,
            job_fetch_limit: 100,
            max_upload_mb: 16,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            jobs_csv: std::env::var("JOBS_CSV")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            job_fetch_limit: parse_env("JOB_FETCH_LIMIT", defaults.job_fetch_limit)?,
            max_upload_mb: parse_env("MAX_UPLOAD_MB", defaults.max_upload_mb)?,
        })
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb.saturating_mul(1024 * 1024)
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.job_fetch_limit, 100);
        assert_eq!(config.max_upload_bytes(), 16 * 1024 * 1024);
        assert!(config.jobs_csv.is_none());
    }

    #[test]
    fn test_parse_env_falls_back_when_unset() {
        let value: usize = parse_env("ATS_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }
}
