//! Shared HTTP client for Graph resource clients.
//!
//! [`HttpClient`] wraps a `reqwest::Client` together with a base URL and a set
//! of default headers. Every resource client holds one, and nested clients
//! share it: cloning an `HttpClient` keeps the same settings allocation, so
//! [`HttpClient::same_as`] can tell whether two clients came from the same
//! configuration.
//!
//! # Failure handling
//!
//! Each call is a single request/response round trip. There is no retry,
//! pagination or caching at this layer. Transport errors, non-2xx statuses
//! and decoding failures are returned as [`GraphError`] unchanged.
//!
//! # Security
//!
//! The bearer token is stored as a sensitive header value and is redacted
//! from error bodies. It is never logged.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::{Config, DEFAULT_TIMEOUT_SECS};
use crate::error::GraphError;

/// Base URL of the Graph v1.0 endpoint.
pub const GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

/// Product name used in the `User-Agent` header when none is configured.
pub const DEFAULT_PRODUCT: &str = "teams";

/// Returns the `User-Agent` value for `product`: `<product>[graph]/<version>`.
pub fn user_agent(product: &str) -> String {
    format!("{}[graph]/{}", product, env!("CARGO_PKG_VERSION"))
}

/// Settings used to build an [`HttpClient`].
///
/// Every field is optional; unset fields fall back to the Graph defaults.
#[derive(Clone, Default)]
pub struct HttpConfig {
    /// Base URL requests are resolved against.
    pub base_url: Option<String>,

    /// Extra default headers, applied after the built-in ones.
    pub headers: Vec<(String, String)>,

    /// Request timeout.
    pub timeout: Option<Duration>,

    /// Product name for the `User-Agent` header.
    pub product: Option<String>,

    /// Bearer token sent as `Authorization`.
    bearer_token: Option<String>,
}

impl HttpConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Adds a default header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the product name for the `User-Agent` header.
    pub fn with_product(mut self, product: impl Into<String>) -> Self {
        self.product = Some(product.into());
        self
    }

    /// Sets the bearer token.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }
}

impl fmt::Debug for HttpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpConfig")
            .field("base_url", &self.base_url)
            .field("headers", &self.headers)
            .field("timeout", &self.timeout)
            .field("product", &self.product)
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl From<&Config> for HttpConfig {
    fn from(config: &Config) -> Self {
        HttpConfig::new()
            .with_base_url(config.base_url.clone())
            .with_product(config.product.clone())
            .with_timeout(config.timeout)
            .with_bearer_token(config.access_token())
    }
}

/// Per-call request options.
#[derive(Debug, Clone, Default)]
pub struct RequestConfig {
    /// Headers added to this request only, overriding defaults.
    pub headers: HeaderMap,

    /// Timeout for this request only.
    pub timeout: Option<Duration>,
}

impl RequestConfig {
    /// Creates empty request options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a header.
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Sets the timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header from strings.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::InvalidHeader` if the name or value is not a
    /// valid HTTP header.
    pub fn insert_header(&mut self, name: &str, value: &str) -> Result<(), GraphError> {
        let (name, value) = parse_header(name, value)?;
        self.headers.insert(name, value);
        Ok(())
    }
}

/// A decoded HTTP response.
#[derive(Debug, Clone)]
pub struct HttpResponse<T> {
    /// Response status.
    pub status: StatusCode,
    /// Response headers.
    pub headers: HeaderMap,
    /// The decoded JSON body.
    pub data: T,
}

/// How a resource client obtains its HTTP client.
#[derive(Debug, Clone, Default)]
pub enum ClientOptions {
    /// Build a new client with Graph defaults.
    #[default]
    Default,
    /// Reuse an existing client, keeping its base URL and headers.
    Client(HttpClient),
    /// Build a new client from this configuration.
    Config(HttpConfig),
}

impl ClientOptions {
    /// Resolves the options into a client.
    ///
    /// An existing client is returned as is when it already carries a
    /// `User-Agent`; otherwise a copy with the default `User-Agent` added is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::HttpClient` if a new client fails to build.
    pub fn into_client(self) -> Result<HttpClient, GraphError> {
        match self {
            ClientOptions::Default => HttpClient::new(HttpConfig::default()),
            ClientOptions::Config(config) => HttpClient::new(config),
            ClientOptions::Client(client) => {
                if client.headers().contains_key(USER_AGENT) {
                    Ok(client)
                } else {
                    let mut extra = HeaderMap::new();
                    extra.insert(USER_AGENT, header_value(&user_agent(DEFAULT_PRODUCT))?);
                    Ok(client.with_headers(&extra))
                }
            }
        }
    }
}

impl From<HttpClient> for ClientOptions {
    fn from(client: HttpClient) -> Self {
        ClientOptions::Client(client)
    }
}

impl From<&HttpClient> for ClientOptions {
    fn from(client: &HttpClient) -> Self {
        ClientOptions::Client(client.clone())
    }
}

impl From<HttpConfig> for ClientOptions {
    fn from(config: HttpConfig) -> Self {
        ClientOptions::Config(config)
    }
}

impl From<&Config> for ClientOptions {
    fn from(config: &Config) -> Self {
        ClientOptions::Config(HttpConfig::from(config))
    }
}

struct Settings {
    base_url: String,
    headers: HeaderMap,
    /// Token to strip from error bodies.
    secret: Option<String>,
}

/// HTTP client shared by Graph resource clients.
///
/// Cloning is cheap and keeps the same settings.
///
/// # Example
///
/// ```ignore
/// let client = HttpClient::new(HttpConfig::new().with_bearer_token(token))?;
/// let me: HttpResponse<serde_json::Value> = client.get("/me", None).await?;
/// println!("{}", me.data["displayName"]);
/// ```
#[derive(Clone)]
pub struct HttpClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,
    settings: Arc<Settings>,
}

impl HttpClient {
    /// Builds a client from configuration.
    ///
    /// Defaults: base URL [`GRAPH_BASE_URL`], `Accept: application/json`,
    /// `User-Agent` from [`user_agent`], 30 second timeout. Configured
    /// headers override the defaults.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::InvalidHeader` for malformed headers and
    /// `GraphError::HttpClient` if reqwest fails to initialize.
    pub fn new(config: HttpConfig) -> Result<Self, GraphError> {
        let base_url = config
            .base_url
            .as_deref()
            .unwrap_or(GRAPH_BASE_URL)
            .trim()
            .trim_end_matches('/')
            .to_string();

        let product = config.product.as_deref().unwrap_or(DEFAULT_PRODUCT);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, header_value(&user_agent(product))?);

        for (name, value) in &config.headers {
            let (name, value) = parse_header(name, value)?;
            headers.insert(name, value);
        }

        if let Some(token) = &config.bearer_token {
            let mut value = header_value(&format!("Bearer {}", token))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let timeout = config
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(GraphError::HttpClient)?;

        Ok(Self {
            http,
            settings: Arc::new(Settings {
                base_url,
                headers,
                secret: config.bearer_token.filter(|t| !t.is_empty()),
            }),
        })
    }

    /// Builds a client with Graph defaults and no credentials.
    pub fn graph_default() -> Result<Self, GraphError> {
        Self::new(HttpConfig::default())
    }

    /// Returns a copy with `headers` merged over the default headers.
    ///
    /// The original client is not modified.
    pub fn with_headers(&self, headers: &HeaderMap) -> Self {
        let mut merged = self.settings.headers.clone();
        for (name, value) in headers {
            merged.insert(name.clone(), value.clone());
        }
        self.with_settings(self.settings.base_url.clone(), merged)
    }

    /// Returns a copy pointed at another base URL.
    pub fn with_base_url(&self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        self.with_settings(base_url, self.settings.headers.clone())
    }

    fn with_settings(&self, base_url: String, headers: HeaderMap) -> Self {
        Self {
            http: self.http.clone(),
            settings: Arc::new(Settings {
                base_url,
                headers,
                secret: self.settings.secret.clone(),
            }),
        }
    }

    /// Base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        &self.settings.base_url
    }

    /// Default headers sent with every request.
    pub fn headers(&self) -> &HeaderMap {
        &self.settings.headers
    }

    /// Returns true if both clients share the same settings allocation.
    pub fn same_as(&self, other: &HttpClient) -> bool {
        Arc::ptr_eq(&self.settings, &other.settings)
    }

    /// Resolves `path` against the base URL. Absolute URLs pass through.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else if path.starts_with('/') {
            format!("{}{}", self.settings.base_url, path)
        } else {
            format!("{}/{}", self.settings.base_url, path)
        }
    }

    /// Makes a GET request.
    pub async fn get<T>(
        &self,
        url: &str,
        config: Option<RequestConfig>,
    ) -> Result<HttpResponse<T>, GraphError>
    where
        T: DeserializeOwned,
    {
        self.request::<(), T>(Method::GET, url, None, config).await
    }

    /// Makes a POST request.
    pub async fn post<B, T>(
        &self,
        url: &str,
        body: Option<&B>,
        config: Option<RequestConfig>,
    ) -> Result<HttpResponse<T>, GraphError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, url, body, config).await
    }

    /// Makes a PUT request.
    pub async fn put<B, T>(
        &self,
        url: &str,
        body: Option<&B>,
        config: Option<RequestConfig>,
    ) -> Result<HttpResponse<T>, GraphError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, url, body, config).await
    }

    /// Makes a PATCH request.
    pub async fn patch<B, T>(
        &self,
        url: &str,
        body: Option<&B>,
        config: Option<RequestConfig>,
    ) -> Result<HttpResponse<T>, GraphError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PATCH, url, body, config).await
    }

    /// Makes a DELETE request.
    pub async fn delete<T>(
        &self,
        url: &str,
        config: Option<RequestConfig>,
    ) -> Result<HttpResponse<T>, GraphError>
    where
        T: DeserializeOwned,
    {
        self.request::<(), T>(Method::DELETE, url, None, config).await
    }

    /// Makes a request and decodes the JSON response.
    ///
    /// An empty response body (e.g. `204 No Content`) is decoded as JSON
    /// `null`, so `()` and `Option<_>` response types work for it.
    pub async fn request<B, T>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
        config: Option<RequestConfig>,
    ) -> Result<HttpResponse<T>, GraphError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(url);

        tracing::debug!(method = %method, url = %url, "Making Graph API request");

        let mut req = self
            .http
            .request(method.clone(), &url)
            .headers(self.settings.headers.clone());

        if let Some(body) = body {
            req = req.json(body);
        }

        if let Some(config) = config {
            req = req.headers(config.headers);
            if let Some(timeout) = config.timeout {
                req = req.timeout(timeout);
            }
        }

        let response = req.send().await.map_err(GraphError::Http)?;
        let status = response.status();
        let headers = response.headers().clone();

        let text = response.text().await.map_err(GraphError::Http)?;

        if !status.is_success() {
            let body = self.sanitize(&text);
            tracing::debug!(method = %method, status = %status, "Graph API returned an error status");
            return Err(GraphError::HttpStatus { status, body });
        }

        tracing::trace!(body = %self.sanitize(&text), "Graph API response");

        let data = if text.trim().is_empty() {
            serde_json::from_str("null")?
        } else {
            serde_json::from_str(&text)?
        };

        Ok(HttpResponse {
            status,
            headers,
            data,
        })
    }

    fn sanitize(&self, message: &str) -> String {
        match &self.settings.secret {
            Some(secret) => GraphError::sanitize_message(message, secret),
            None => message.to_string(),
        }
    }
}

impl fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sensitive header values print as "Sensitive".
        f.debug_struct("HttpClient")
            .field("base_url", &self.settings.base_url)
            .field("headers", &self.settings.headers)
            .finish()
    }
}

fn header_value(value: &str) -> Result<HeaderValue, GraphError> {
    HeaderValue::from_str(value).map_err(|e| GraphError::invalid_header("value", e.to_string()))
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), GraphError> {
    let header_name = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| GraphError::invalid_header(name, e.to_string()))?;
    let header_value =
        HeaderValue::from_str(value).map_err(|e| GraphError::invalid_header(name, e.to_string()))?;
    Ok((header_name, header_value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_format() {
        let ua = user_agent("spark");
        assert!(ua.starts_with("spark[graph]/"));
        assert!(ua.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn test_new_applies_defaults() {
        let client = HttpClient::graph_default().unwrap();
        assert_eq!(client.base_url(), GRAPH_BASE_URL);
        assert_eq!(
            client.headers().get(USER_AGENT).unwrap(),
            user_agent(DEFAULT_PRODUCT).as_str()
        );
        assert_eq!(client.headers().get(ACCEPT).unwrap(), "application/json");
        assert!(client.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_new_normalizes_base_url() {
        let client =
            HttpClient::new(HttpConfig::new().with_base_url("http://localhost:8080/v1.0/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080/v1.0");
    }

    #[test]
    fn test_configured_headers_override_defaults() {
        let config = HttpConfig::new()
            .with_product("spark")
            .with_header("User-Agent", "custom/1.0")
            .with_header("ConsistencyLevel", "eventual");
        let client = HttpClient::new(config).unwrap();
        assert_eq!(client.headers().get(USER_AGENT).unwrap(), "custom/1.0");
        assert_eq!(client.headers().get("consistencylevel").unwrap(), "eventual");
    }

    #[test]
    fn test_invalid_header_is_rejected() {
        let config = HttpConfig::new().with_header("Bad Header", "x");
        let err = HttpClient::new(config).unwrap_err();
        assert!(matches!(err, GraphError::InvalidHeader { .. }));
    }

    #[test]
    fn test_bearer_token_is_sensitive() {
        let client =
            HttpClient::new(HttpConfig::new().with_bearer_token("secret-token-123")).unwrap();
        let auth = client.headers().get(AUTHORIZATION).unwrap();
        assert!(auth.is_sensitive());
        assert!(!format!("{:?}", client).contains("secret-token-123"));
        assert!(!format!("{:?}", HttpConfig::new().with_bearer_token("secret-token-123"))
            .contains("secret-token-123"));
    }

    #[test]
    fn test_clone_shares_settings() {
        let client = HttpClient::graph_default().unwrap();
        let clone = client.clone();
        assert!(client.same_as(&clone));
    }

    #[test]
    fn test_with_headers_leaves_original_untouched() {
        let client = HttpClient::graph_default().unwrap();
        let mut extra = HeaderMap::new();
        extra.insert("prefer", HeaderValue::from_static("outlook.timezone=\"UTC\""));

        let derived = client.with_headers(&extra);
        assert!(derived.headers().contains_key("prefer"));
        assert!(!client.headers().contains_key("prefer"));
        assert!(!client.same_as(&derived));
        assert_eq!(derived.base_url(), client.base_url());
    }

    #[test]
    fn test_url_resolution() {
        let client = HttpClient::graph_default().unwrap();
        assert_eq!(client.url("/me"), format!("{}/me", GRAPH_BASE_URL));
        assert_eq!(client.url("me"), format!("{}/me", GRAPH_BASE_URL));
        assert_eq!(
            client.url("https://graph.microsoft.com/v1.0/me/events?$skip=10"),
            "https://graph.microsoft.com/v1.0/me/events?$skip=10"
        );
    }

    #[test]
    fn test_client_options_reuse_existing_client() {
        let client = HttpClient::graph_default().unwrap();
        let resolved = ClientOptions::from(&client).into_client().unwrap();
        assert!(resolved.same_as(&client));
    }

    #[test]
    fn test_client_options_add_missing_user_agent() {
        let config = HttpConfig::new().with_base_url("http://localhost:9000");
        let client = HttpClient::new(config).unwrap();
        let mut stripped = client.headers().clone();
        stripped.remove(USER_AGENT);
        let bare = HttpClient {
            http: Client::new(),
            settings: Arc::new(Settings {
                base_url: client.base_url().to_string(),
                headers: stripped,
                secret: None,
            }),
        };

        let resolved = ClientOptions::Client(bare).into_client().unwrap();
        assert_eq!(resolved.base_url(), "http://localhost:9000");
        assert!(resolved.headers().contains_key(USER_AGENT));
    }

    #[test]
    fn test_client_options_from_config() {
        let config = Config::new("tok");
        let client = ClientOptions::from(&config).into_client().unwrap();
        assert_eq!(client.base_url(), GRAPH_BASE_URL);
        assert!(client.headers().contains_key(AUTHORIZATION));
    }

    #[test]
    fn test_request_config_insert_header() {
        let mut config = RequestConfig::new().with_timeout(Duration::from_secs(5));
        config.insert_header("If-Match", "W/\"abc\"").unwrap();
        assert_eq!(config.headers.get("if-match").unwrap(), "W/\"abc\"");
        assert!(config.insert_header("If-Match", "bad\nvalue").is_err());
    }

    #[test]
    fn test_sanitize_uses_bearer_token() {
        let client = HttpClient::new(HttpConfig::new().with_bearer_token("tok-999")).unwrap();
        assert_eq!(client.sanitize("echo tok-999"), "echo [REDACTED]");
    }
}
