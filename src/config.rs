//! Configuration management for the Graph client.
//!
//! This module handles loading configuration from environment variables,
//! with validation to ensure required values are present.

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::GraphError;
use crate::http::{DEFAULT_PRODUCT, GRAPH_BASE_URL};

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Whole-token values treated as unset, compared case-insensitively.
const PLACEHOLDER_TOKENS: &[&str] = &[
    "your_token",
    "your-token",
    "your_token_here",
    "your-token-here",
    "<token>",
    "placeholder",
    "changeme",
];

/// Configuration for connecting to Microsoft Graph.
///
/// The access token is stored but never logged; the `Debug` output
/// redacts it.
#[derive(Clone)]
pub struct Config {
    /// Base URL for the Graph API (e.g., `https://graph.microsoft.com/v1.0`).
    pub base_url: String,

    /// OAuth bearer token.
    /// This value must never be logged or included in error messages.
    access_token: String,

    /// Product name placed in the `User-Agent` header.
    pub product: String,

    /// Request timeout.
    pub timeout: Duration,
}

impl Config {
    /// Creates a configuration with Graph defaults and the given token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            base_url: GRAPH_BASE_URL.to_string(),
            access_token: access_token.into(),
            product: DEFAULT_PRODUCT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `GRAPH_ACCESS_TOKEN` (required): bearer token for Graph
    /// - `GRAPH_BASE_URL`: defaults to `https://graph.microsoft.com/v1.0`
    /// - `GRAPH_PRODUCT`: product name for the `User-Agent`, defaults to `teams`
    /// - `GRAPH_TIMEOUT_SECS`: request timeout, defaults to 30
    ///
    /// # Errors
    ///
    /// Returns `GraphError::Config` if the token is missing or any value
    /// fails validation.
    ///
    /// # Example
    ///
    /// ```ignore
    /// dotenvy::dotenv().ok();
    /// let config = Config::from_env()?;
    /// ```
    pub fn from_env() -> Result<Self, GraphError> {
        let access_token = Self::get_required_env("GRAPH_ACCESS_TOKEN")?;
        Self::validate_access_token(&access_token)?;

        let base_url = match Self::get_optional_env("GRAPH_BASE_URL") {
            Some(url) => Self::validate_base_url(url)?,
            None => GRAPH_BASE_URL.to_string(),
        };

        let product = Self::get_optional_env("GRAPH_PRODUCT")
            .map(|p| p.trim().to_string())
            .unwrap_or_else(|| DEFAULT_PRODUCT.to_string());

        let timeout = match Self::get_optional_env("GRAPH_TIMEOUT_SECS") {
            Some(raw) => Self::parse_timeout(&raw)?,
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Config {
            base_url,
            access_token,
            product,
            timeout,
        })
    }

    /// Returns the bearer token.
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Gets a required environment variable, returning an error if missing or empty.
    fn get_required_env(name: &str) -> Result<String, GraphError> {
        Self::get_optional_env(name).ok_or_else(|| GraphError::missing_env(name))
    }

    /// Gets an environment variable, treating blank values as absent.
    fn get_optional_env(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }

    /// Validates and normalizes the base URL.
    fn validate_base_url(url: String) -> Result<String, GraphError> {
        let url = url.trim().trim_end_matches('/').to_string();

        let parsed = Url::parse(&url)
            .map_err(|e| GraphError::invalid_config(format!("GRAPH_BASE_URL is invalid: {}", e)))?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(GraphError::invalid_config(
                "GRAPH_BASE_URL must start with http:// or https://",
            ));
        }

        Ok(url)
    }

    /// Rejects tokens that are entirely a placeholder, such as `changeme` or
    /// `xxxx`. Substrings inside a longer token are not checked.
    fn validate_access_token(token: &str) -> Result<(), GraphError> {
        let candidate = token.trim().to_ascii_lowercase();
        let is_placeholder = PLACEHOLDER_TOKENS.contains(&candidate.as_str())
            || candidate.chars().all(|c| c == 'x');

        if is_placeholder {
            return Err(GraphError::invalid_config(
                "GRAPH_ACCESS_TOKEN appears to be a placeholder value",
            ));
        }

        Ok(())
    }

    fn parse_timeout(raw: &str) -> Result<Duration, GraphError> {
        match raw.trim().parse::<u64>() {
            Ok(0) | Err(_) => Err(GraphError::invalid_config(
                "GRAPH_TIMEOUT_SECS must be a positive integer",
            )),
            Ok(secs) => Ok(Duration::from_secs(secs)),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .field("product", &self.product)
            .field("timeout", &self.timeout)
            .finish()
    }
}
