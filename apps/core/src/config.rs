//! Environment configuration with validation

use std::env;
use std::str::FromStr;
use std::time::Duration;
use validator::Validate;

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_MAX_PDF_PAGES: usize = 200;
const DEFAULT_EXTRACT_TIMEOUT_SECS: u64 = 30;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// Service configuration, read from `EXAMPREP_*` environment variables.
#[derive(Debug, Clone, Validate)]
pub struct Config {
    #[validate(length(min = 1))]
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
    /// Uploads above this size are rejected before extraction.
    #[validate(range(min = 1))]
    pub max_upload_bytes: usize,
    /// Extraction results with more pages than this are rejected.
    #[validate(range(min = 1))]
    pub max_pdf_pages: usize,
    #[validate(range(min = 1))]
    pub extract_timeout_secs: u64,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            max_pdf_pages: DEFAULT_MAX_PDF_PAGES,
            extract_timeout_secs: DEFAULT_EXTRACT_TIMEOUT_SECS,
            log_format: LogFormat::Pretty,
        }
    }
}

/// Read and parse a variable, falling back to `default` when unset
fn env_or<T>(key: &str, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{}={:?}: {}", key, raw, e))),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(AppError::Config(format!("{}: {}", key, e))),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let config = Self {
            host: env_or("EXAMPREP_HOST", DEFAULT_HOST.to_string())?,
            port: env_or("EXAMPREP_PORT", DEFAULT_PORT)?,
            max_upload_bytes: env_or("EXAMPREP_MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES)?,
            max_pdf_pages: env_or("EXAMPREP_MAX_PDF_PAGES", DEFAULT_MAX_PDF_PAGES)?,
            extract_timeout_secs: env_or(
                "EXAMPREP_EXTRACT_TIMEOUT_SECS",
                DEFAULT_EXTRACT_TIMEOUT_SECS,
            )?,
            log_format: env_or("EXAMPREP_LOG_FORMAT", LogFormat::Pretty)?,
        };

        config
            .validate()
            .map_err(|e| AppError::Config(e.to_string()))?;

        Ok(config)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn extract_timeout(&self) -> Duration {
        Duration::from_secs(self.extract_timeout_secs)
    }
}
