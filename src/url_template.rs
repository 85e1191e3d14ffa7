//! Path templating and query-string construction.
//!
//! Every Graph resource client resolves its URL through [`inject_url`]: the
//! `{name}` placeholders of a path template are filled from a data bag, and
//! the query-located parameters are appended as a query string. The set of
//! parameters an operation accepts is declared up front as a slice of
//! [`ParamDescriptor`]s.
//!
//! Path values are inserted verbatim. Callers are responsible for supplying
//! URL-safe identifiers; a value containing `/` yields a well-formed but
//! wrong URL.

use serde_json::{Map, Value};

/// A bag of parameter values keyed by parameter name.
pub type DataBag = Map<String, Value>;

/// Where a parameter is carried on the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// Substituted into a `{name}` placeholder of the path template.
    Path,
    /// Appended to the query string.
    Query,
    /// Sent as an HTTP header; never part of the URL.
    Header,
}

/// Declaration of a single operation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamDescriptor {
    /// Parameter name, matching the placeholder, query key or header name.
    pub name: &'static str,
    /// Where the parameter goes.
    pub location: ParamLocation,
    /// Array serialization for query parameters: repeated keys when `true`
    /// (the default), comma-joined when `false`.
    pub explode: Option<bool>,
}

impl ParamDescriptor {
    /// Declares a path parameter.
    pub const fn path(name: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Path,
            explode: None,
        }
    }

    /// Declares a query parameter.
    pub const fn query(name: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Query,
            explode: None,
        }
    }

    /// Declares a header parameter.
    pub const fn header(name: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Header,
            explode: None,
        }
    }

    /// Sets the array serialization policy.
    pub const fn exploded(mut self, explode: bool) -> Self {
        self.explode = Some(explode);
        self
    }

    fn explodes(&self) -> bool {
        self.explode.unwrap_or(true)
    }
}

/// Resolves `template` against `params` and `data`.
///
/// Path placeholders are replaced everywhere they occur. A placeholder whose
/// value is missing or `null` is left in place. Query parameters are appended
/// in declaration order; when none are present the result has no `?`.
///
/// # Example
///
/// ```
/// use graph_cards::url_template::{inject_url, ParamDescriptor};
/// use serde_json::json;
///
/// let params = [
///     ParamDescriptor::path("x"),
///     ParamDescriptor::path("y"),
///     ParamDescriptor::query("q"),
/// ];
/// let data = json!({"x": "1", "y": 2, "q": "v"});
/// let url = inject_url("/a/{x}/b/{y}", &params, data.as_object().unwrap());
/// assert_eq!(url, "/a/1/b/2?q=v");
/// ```
pub fn inject_url(template: &str, params: &[ParamDescriptor], data: &DataBag) -> String {
    let mut url = substitute_path(template, params, data);
    url.push_str(&build_query(params, data));
    url
}

/// Replaces the path placeholders of `template` without touching the query.
pub fn substitute_path(template: &str, params: &[ParamDescriptor], data: &DataBag) -> String {
    let mut path = template.to_string();

    for param in params.iter().filter(|p| p.location == ParamLocation::Path) {
        let placeholder = format!("{{{}}}", param.name);
        match present(data, param.name) {
            Some(value) => path = path.replace(&placeholder, &coerce(value)),
            None => {
                if path.contains(&placeholder) {
                    tracing::warn!(
                        param = param.name,
                        template = template,
                        "Path parameter has no value, placeholder left unresolved"
                    );
                }
            }
        }
    }

    path
}

/// Builds the `?`-prefixed query string for the query-located parameters.
///
/// Returns an empty string when no query parameter has a value.
pub fn build_query(params: &[ParamDescriptor], data: &DataBag) -> String {
    let mut pairs: Vec<String> = Vec::new();

    for param in params.iter().filter(|p| p.location == ParamLocation::Query) {
        let Some(value) = present(data, param.name) else {
            continue;
        };
        let key = encode_key(param.name);

        match value {
            Value::Array(items) => {
                let items: Vec<String> = items
                    .iter()
                    .filter(|item| !item.is_null())
                    .map(|item| urlencoding::encode(&coerce(item)).into_owned())
                    .collect();
                if items.is_empty() {
                    continue;
                }
                if param.explodes() {
                    pairs.extend(items.iter().map(|item| format!("{}={}", key, item)));
                } else {
                    pairs.push(format!("{}={}", key, items.join(",")));
                }
            }
            other => pairs.push(format!("{}={}", key, urlencoding::encode(&coerce(other)))),
        }
    }

    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

/// Collects the header-located parameters that have a value.
///
/// These are never placed in the URL; the caller attaches them as request
/// headers.
pub fn header_values(params: &[ParamDescriptor], data: &DataBag) -> Vec<(&'static str, String)> {
    params
        .iter()
        .filter(|p| p.location == ParamLocation::Header)
        .filter_map(|p| present(data, p.name).map(|value| (p.name, coerce(value))))
        .collect()
}

fn present<'a>(data: &'a DataBag, name: &str) -> Option<&'a Value> {
    data.get(name).filter(|value| !value.is_null())
}

/// OData system query options keep their literal `$` prefix.
fn encode_key(name: &str) -> String {
    match name.strip_prefix('$') {
        Some(rest) => format!("${}", urlencoding::encode(rest)),
        None => urlencoding::encode(name).into_owned(),
    }
}

/// String coercion for parameter values.
fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items.iter().map(coerce).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bag(value: Value) -> DataBag {
        match value {
            Value::Object(map) => map,
            _ => panic!("test data must be an object"),
        }
    }

    #[test]
    fn test_path_and_query_resolution() {
        let params = [
            ParamDescriptor::path("x"),
            ParamDescriptor::path("y"),
            ParamDescriptor::query("q"),
        ];
        let data = bag(json!({"x": "1", "y": "2", "q": "v"}));
        assert_eq!(inject_url("/a/{x}/b/{y}", &params, &data), "/a/1/b/2?q=v");
    }

    #[test]
    fn test_no_query_has_no_trailing_question_mark() {
        let params = [ParamDescriptor::path("x"), ParamDescriptor::query("q")];
        let data = bag(json!({"x": "1"}));
        assert_eq!(inject_url("/a/{x}", &params, &data), "/a/1");
    }

    #[test]
    fn test_repeated_placeholder_replaced_everywhere() {
        let params = [ParamDescriptor::path("id")];
        let data = bag(json!({"id": "42"}));
        assert_eq!(inject_url("/{id}/copy/{id}", &params, &data), "/42/copy/42");
    }

    #[test]
    fn test_missing_path_value_leaves_placeholder() {
        let params = [ParamDescriptor::path("event-id")];
        let data = DataBag::new();
        assert_eq!(
            inject_url("/me/events/{event-id}", &params, &data),
            "/me/events/{event-id}"
        );
    }

    #[test]
    fn test_null_path_value_leaves_placeholder() {
        let params = [ParamDescriptor::path("chat-id")];
        let data = bag(json!({"chat-id": null}));
        assert_eq!(inject_url("/chats/{chat-id}", &params, &data), "/chats/{chat-id}");
    }

    #[test]
    fn test_path_values_are_not_encoded() {
        let params = [ParamDescriptor::path("id")];
        let data = bag(json!({"id": "a/b c"}));
        assert_eq!(inject_url("/items/{id}", &params, &data), "/items/a/b c");
    }

    #[test]
    fn test_numbers_and_booleans_are_coerced() {
        let params = [
            ParamDescriptor::path("n"),
            ParamDescriptor::query("$top"),
            ParamDescriptor::query("$count"),
        ];
        let data = bag(json!({"n": 7, "$top": 10, "$count": true}));
        assert_eq!(inject_url("/x/{n}", &params, &data), "/x/7?$top=10&$count=true");
    }

    #[test]
    fn test_header_params_excluded_from_url() {
        let params = [ParamDescriptor::path("id"), ParamDescriptor::header("If-Match")];
        let data = bag(json!({"id": "1", "If-Match": "W/\"etag\""}));
        assert_eq!(inject_url("/e/{id}", &params, &data), "/e/1");
        assert_eq!(
            header_values(&params, &data),
            vec![("If-Match", "W/\"etag\"".to_string())]
        );
    }

    #[test]
    fn test_query_values_are_percent_encoded() {
        let params = [ParamDescriptor::query("$filter")];
        let data = bag(json!({"$filter": "subject eq 'Weekly sync'"}));
        assert_eq!(
            build_query(&params, &data),
            "?$filter=subject%20eq%20%27Weekly%20sync%27"
        );
    }

    #[test]
    fn test_exploded_array_repeats_key() {
        let params = [ParamDescriptor::query("id")];
        let data = bag(json!({"id": ["a", "b"]}));
        assert_eq!(build_query(&params, &data), "?id=a&id=b");
    }

    #[test]
    fn test_unexploded_array_is_comma_joined() {
        let params = [ParamDescriptor::query("$select").exploded(false)];
        let data = bag(json!({"$select": ["subject", "start", "end"]}));
        assert_eq!(build_query(&params, &data), "?$select=subject,start,end");
    }

    #[test]
    fn test_empty_array_is_skipped() {
        let params = [ParamDescriptor::query("$select").exploded(false)];
        let data = bag(json!({"$select": []}));
        assert_eq!(build_query(&params, &data), "");
    }

    #[test]
    fn test_query_order_follows_declaration() {
        let params = [ParamDescriptor::query("b"), ParamDescriptor::query("a")];
        let data = bag(json!({"a": "1", "b": "2"}));
        assert_eq!(build_query(&params, &data), "?b=2&a=1");
    }

    #[test]
    fn test_undeclared_data_is_ignored() {
        let params = [ParamDescriptor::query("q")];
        let data = bag(json!({"q": "v", "other": "ignored"}));
        assert_eq!(build_query(&params, &data), "?q=v");
    }
}
