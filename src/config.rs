//! Client configuration
//!
//! The only external setting is the service base URL, read from
//! `ADVISION_API_BASE`. Without it the local development server is used.

use crate::error::{AppError, Result};
use std::time::Duration;
use url::Url;

pub const API_BASE_ENV: &str = "ADVISION_API_BASE";
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Always ends with `/` so relative endpoints join under it
    pub api_base: Url,
    pub request_timeout: Duration,
}

impl ClientConfig {
    /// Read the base URL from the environment
    pub fn from_env() -> Result<Self> {
        let value = std::env::var(API_BASE_ENV).ok();
        Self::from_value(value.as_deref())
    }

    /// Build from an optional raw base URL; blank counts as absent
    pub fn from_value(value: Option<&str>) -> Result<Self> {
        let raw = value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE);

        Ok(Self {
            api_base: parse_base_url(raw)?,
            request_timeout: REQUEST_TIMEOUT,
        })
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default base URL is valid"),
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| AppError::Config(format!("Invalid {} '{}': {}", API_BASE_ENV, raw, e)))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(AppError::Config(format!(
            "{} must be an http(s) URL, got '{}'",
            API_BASE_ENV, raw
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
