use crate::error::{Error, Result};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        let raw = std::env::var("APP_MODE")
            .ok()
            .or_else(|| option_env!("APP_MODE").map(str::to_string))
            .unwrap_or_default();
        Self::parse(&raw)
    }

    fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// Where the admission REST backend lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// `ADMISSION_API_URL` from the process environment, then the value baked in
    /// at compile time (the only option in the browser), then the default.
    pub fn from_env() -> Result<Self> {
        let raw = std::env::var("ADMISSION_API_URL")
            .ok()
            .or_else(|| option_env!("ADMISSION_API_URL").map(str::to_string))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(&raw)
    }

    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let parsed = Url::parse(trimmed)
            .map_err(|e| Error::config(format!("invalid ADMISSION_API_URL {trimmed:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "ADMISSION_API_URL must be http(s), got {}",
                parsed.scheme()
            )));
        }
        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}
