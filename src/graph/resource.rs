//! Shared plumbing for Graph resource clients.
//!
//! A resource client is a stateless proxy: a shared [`HttpClient`], the path
//! values captured while navigating (e.g. an `event-id`), and a set of
//! [`Endpoint`] declarations. Every verb method goes through
//! [`ResourceClient::send`], which merges the captured values with the
//! caller's parameters, resolves the URL with [`inject_url`], attaches
//! header-located parameters, and makes exactly one request.

use std::fmt;
use std::marker::PhantomData;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::GraphError;
use crate::http::{ClientOptions, HttpClient, RequestConfig};
use crate::url_template::{header_values, inject_url, DataBag, ParamDescriptor};

/// A path template and the parameters an operation accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Path template relative to the base URL, with `{name}` placeholders.
    pub template: &'static str,
    /// Path-located parameters.
    pub path_params: &'static [ParamDescriptor],
    /// Query- and header-located parameters.
    pub params: &'static [ParamDescriptor],
}

impl Endpoint {
    /// Declares an endpoint.
    pub const fn new(
        template: &'static str,
        path_params: &'static [ParamDescriptor],
        params: &'static [ParamDescriptor],
    ) -> Self {
        Self {
            template,
            path_params,
            params,
        }
    }

    /// All descriptors, path parameters first.
    pub fn descriptors(&self) -> Vec<ParamDescriptor> {
        self.path_params
            .iter()
            .chain(self.params.iter())
            .copied()
            .collect()
    }
}

/// A URL and the headers resolved for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRequest {
    /// Path and query, relative to the base URL.
    pub url: String,
    /// Header-located parameter values.
    pub headers: Vec<(&'static str, String)>,
}

/// The shared core of every resource client.
#[derive(Debug, Clone)]
pub struct ResourceClient {
    http: HttpClient,
    captured: DataBag,
}

impl ResourceClient {
    /// Wraps an HTTP client with no captured path values.
    pub fn new(http: HttpClient) -> Self {
        Self {
            http,
            captured: DataBag::new(),
        }
    }

    /// Builds the HTTP client from `options` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns an error if a new HTTP client has to be built and fails.
    pub fn from_options(options: impl Into<ClientOptions>) -> Result<Self, GraphError> {
        Ok(Self::new(options.into().into_client()?))
    }

    /// Returns a child sharing the HTTP client, with one more captured path
    /// value.
    pub fn child(&self, name: &str, value: impl Into<String>) -> Self {
        let mut captured = self.captured.clone();
        captured.insert(name.to_string(), Value::String(value.into()));
        Self {
            http: self.http.clone(),
            captured,
        }
    }

    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Path values captured so far.
    pub fn captured(&self) -> &DataBag {
        &self.captured
    }

    /// Resolves the URL and header parameters for `endpoint`.
    ///
    /// Values from `params` override captured values of the same name.
    ///
    /// # Errors
    ///
    /// Returns `GraphError::Validation` if `params` does not serialize to a
    /// JSON object.
    pub fn resolve<P>(&self, endpoint: &Endpoint, params: Option<&P>) -> Result<ResolvedRequest, GraphError>
    where
        P: Serialize + ?Sized,
    {
        let mut data = self.captured.clone();

        if let Some(params) = params {
            match serde_json::to_value(params)? {
                Value::Object(map) => data.extend(map),
                Value::Null => {}
                other => {
                    return Err(GraphError::validation(format!(
                        "parameters must serialize to an object, got {}",
                        crate::error::json_kind(&other)
                    )))
                }
            }
        }

        let descriptors = endpoint.descriptors();
        Ok(ResolvedRequest {
            url: inject_url(endpoint.template, &descriptors, &data),
            headers: header_values(&descriptors, &data),
        })
    }

    /// Resolves `endpoint` and makes one request, returning the decoded body.
    ///
    /// Header parameters are added to the request unless `config` already
    /// sets the same header.
    pub async fn send<P, B, T>(
        &self,
        method: Method,
        endpoint: &Endpoint,
        params: Option<&P>,
        body: Option<&B>,
        config: Option<RequestConfig>,
    ) -> Result<T, GraphError>
    where
        P: Serialize + ?Sized,
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resolved = self.resolve(endpoint, params)?;

        let mut config = config.unwrap_or_default();
        for (name, value) in &resolved.headers {
            if !config.headers.contains_key(*name) {
                config.insert_header(name, value)?;
            }
        }

        let response = self
            .http
            .request(method, &resolved.url, body, Some(config))
            .await?;

        Ok(response.data)
    }
}

/// Client for a POST-only action path such as `.../accept` or
/// `.../setPresence`.
///
/// `B` is the request body and `R` the decoded response (`()` for actions
/// answering `202 Accepted` or `204 No Content`).
pub struct ActionClient<B, R = ()> {
    resource: ResourceClient,
    endpoint: &'static Endpoint,
    _types: PhantomData<fn(&B) -> R>,
}

impl<B, R> ActionClient<B, R>
where
    B: Serialize,
    R: DeserializeOwned,
{
    pub(crate) fn new(resource: ResourceClient, endpoint: &'static Endpoint) -> Self {
        Self {
            resource,
            endpoint,
            _types: PhantomData,
        }
    }

    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// The path template this action posts to.
    pub fn template(&self) -> &'static str {
        self.endpoint.template
    }

    /// Resolved path for this action.
    pub fn path(&self) -> Result<String, GraphError> {
        Ok(self.resource.resolve::<()>(self.endpoint, None)?.url)
    }

    /// Invokes the action.
    pub async fn create(&self, body: Option<&B>, config: Option<RequestConfig>) -> Result<R, GraphError> {
        self.resource
            .send::<(), B, R>(Method::POST, self.endpoint, None, body, config)
            .await
    }
}

impl<B, R> Clone for ActionClient<B, R> {
    fn clone(&self) -> Self {
        Self {
            resource: self.resource.clone(),
            endpoint: self.endpoint,
            _types: PhantomData,
        }
    }
}

impl<B, R> fmt::Debug for ActionClient<B, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionClient")
            .field("template", &self.endpoint.template)
            .field("captured", self.resource.captured())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::query::{GetQuery, IfMatch, ODataQuery, GET_PARAMS, IF_MATCH_PARAMS, LIST_PARAMS};

    const ITEM_PATH: &[ParamDescriptor] = &[ParamDescriptor::path("item-id")];
    const ITEM: Endpoint = Endpoint::new("/things/{item-id}", ITEM_PATH, GET_PARAMS);
    const ITEM_DELETE: Endpoint = Endpoint::new("/things/{item-id}", ITEM_PATH, IF_MATCH_PARAMS);
    const LIST: Endpoint = Endpoint::new("/things", &[], LIST_PARAMS);

    fn resource() -> ResourceClient {
        ResourceClient::new(HttpClient::graph_default().unwrap())
    }

    #[test]
    fn test_child_captures_and_shares_client() {
        let parent = resource();
        let child = parent.child("item-id", "42");
        assert!(child.http().same_as(parent.http()));
        assert_eq!(child.captured().get("item-id").unwrap(), "42");
        assert!(parent.captured().is_empty());
    }

    #[test]
    fn test_resolve_uses_captured_values() {
        let client = resource().child("item-id", "42");
        let resolved = client.resolve::<()>(&ITEM, None).unwrap();
        assert_eq!(resolved.url, "/things/42");
        assert!(resolved.headers.is_empty());
    }

    #[test]
    fn test_resolve_with_query() {
        let client = resource().child("item-id", "42");
        let query = GetQuery::new().add_select(["id", "subject"]);
        let resolved = client.resolve(&ITEM, Some(&query)).unwrap();
        assert_eq!(resolved.url, "/things/42?$select=id,subject");
    }

    #[test]
    fn test_params_override_captured_values() {
        let client = resource().child("item-id", "42");
        let params = serde_json::json!({"item-id": "7"});
        let resolved = client.resolve(&ITEM, Some(&params)).unwrap();
        assert_eq!(resolved.url, "/things/7");
    }

    #[test]
    fn test_resolve_header_params() {
        let client = resource().child("item-id", "42");
        let resolved = client
            .resolve(&ITEM_DELETE, Some(&IfMatch::new("W/\"1\"")))
            .unwrap();
        assert_eq!(resolved.url, "/things/42");
        assert_eq!(resolved.headers, vec![("If-Match", "W/\"1\"".to_string())]);
    }

    #[test]
    fn test_resolve_list_query() {
        let query = ODataQuery::new().with_top(5).with_count(true);
        let resolved = resource().resolve(&LIST, Some(&query)).unwrap();
        assert_eq!(resolved.url, "/things?$top=5&$count=true");
    }

    #[test]
    fn test_resolve_rejects_non_object_params() {
        let err = resource().resolve(&LIST, Some(&vec![1, 2])).unwrap_err();
        assert!(matches!(err, GraphError::Validation(_)));
    }

    #[test]
    fn test_endpoint_descriptors_order() {
        let descriptors = ITEM.descriptors();
        assert_eq!(descriptors[0], ParamDescriptor::path("item-id"));
        assert_eq!(descriptors.len(), 1 + GET_PARAMS.len());
    }
}
