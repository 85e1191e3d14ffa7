//! Parameter objects and descriptor lists shared by Graph operations.
//!
//! Parameter objects serialize to a flat JSON object whose keys are the
//! parameter names declared in the descriptor lists (`$top`, `startDateTime`,
//! `If-Match`, ...). Unset fields are skipped so they never reach the URL.

use serde::Serialize;

use crate::url_template::ParamDescriptor;

/// No query or header parameters.
pub const NO_PARAMS: &[ParamDescriptor] = &[];

/// `$select` / `$expand` for single-entity reads.
pub const GET_PARAMS: &[ParamDescriptor] = &[
    ParamDescriptor::query("$select").exploded(false),
    ParamDescriptor::query("$expand").exploded(false),
];

/// OData options accepted by collection reads.
pub const LIST_PARAMS: &[ParamDescriptor] = &[
    ParamDescriptor::query("$top"),
    ParamDescriptor::query("$skip"),
    ParamDescriptor::query("$search"),
    ParamDescriptor::query("$filter"),
    ParamDescriptor::query("$count"),
    ParamDescriptor::query("$orderby").exploded(false),
    ParamDescriptor::query("$select").exploded(false),
    ParamDescriptor::query("$expand").exploded(false),
];

/// Calendar view window plus the collection options.
pub const CALENDAR_VIEW_PARAMS: &[ParamDescriptor] = &[
    ParamDescriptor::query("startDateTime"),
    ParamDescriptor::query("endDateTime"),
    ParamDescriptor::query("$top"),
    ParamDescriptor::query("$skip"),
    ParamDescriptor::query("$filter"),
    ParamDescriptor::query("$count"),
    ParamDescriptor::query("$orderby").exploded(false),
    ParamDescriptor::query("$select").exploded(false),
];

/// Optimistic-concurrency header for updates and deletes.
pub const IF_MATCH_PARAMS: &[ParamDescriptor] = &[ParamDescriptor::header("If-Match")];

/// OData query options for collection reads.
///
/// Paging is pass-through: set `$top`/`$skip` and follow
/// [`Collection::next_link`](crate::graph::models::Collection::next_link)
/// yourself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ODataQuery {
    /// `$top`: page size.
    #[serde(rename = "$top", skip_serializing_if = "Option::is_none")]
    pub top: Option<u32>,

    /// `$skip`: number of items to skip.
    #[serde(rename = "$skip", skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,

    /// `$search`: free-text search expression.
    #[serde(rename = "$search", skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,

    /// `$filter`: OData filter expression.
    #[serde(rename = "$filter", skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,

    /// `$count`: include `@odata.count` in the response.
    #[serde(rename = "$count", skip_serializing_if = "Option::is_none")]
    pub count: Option<bool>,

    /// `$orderby`: sort expressions.
    #[serde(rename = "$orderby", skip_serializing_if = "Vec::is_empty")]
    pub orderby: Vec<String>,

    /// `$select`: properties to return.
    #[serde(rename = "$select", skip_serializing_if = "Vec::is_empty")]
    pub select: Vec<String>,

    /// `$expand`: relationships to expand.
    #[serde(rename = "$expand", skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

impl ODataQuery {
    /// Creates empty query options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `$top`.
    pub fn with_top(mut self, top: u32) -> Self {
        self.top = Some(top);
        self
    }

    /// Sets `$skip`.
    pub fn with_skip(mut self, skip: u32) -> Self {
        self.skip = Some(skip);
        self
    }

    /// Sets `$search`.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets `$filter`.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets `$count`.
    pub fn with_count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    /// Appends `$orderby` expressions.
    pub fn add_orderby<I, S>(mut self, orderby: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.orderby.extend(orderby.into_iter().map(Into::into));
        self
    }

    /// Appends `$select` properties.
    pub fn add_select<I, S>(mut self, select: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select.extend(select.into_iter().map(Into::into));
        self
    }

    /// Appends `$expand` relationships.
    pub fn add_expand<I, S>(mut self, expand: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand.extend(expand.into_iter().map(Into::into));
        self
    }
}

/// `$select` / `$expand` for single-entity reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetQuery {
    /// `$select`: properties to return.
    #[serde(rename = "$select", skip_serializing_if = "Vec::is_empty")]
    pub select: Vec<String>,

    /// `$expand`: relationships to expand.
    #[serde(rename = "$expand", skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
}

impl GetQuery {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `$select` properties.
    pub fn add_select<I, S>(mut self, select: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select.extend(select.into_iter().map(Into::into));
        self
    }

    /// Appends `$expand` relationships.
    pub fn add_expand<I, S>(mut self, expand: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand.extend(expand.into_iter().map(Into::into));
        self
    }
}

/// Calendar view window. Graph requires both bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalendarViewQuery {
    /// Window start, ISO 8601 (e.g. `2024-01-15T00:00:00Z`).
    #[serde(rename = "startDateTime")]
    pub start_date_time: String,

    /// Window end, ISO 8601.
    #[serde(rename = "endDateTime")]
    pub end_date_time: String,

    /// Collection options. `$search` and `$expand` are not declared for this
    /// path and are dropped.
    #[serde(flatten)]
    pub odata: ODataQuery,
}

impl CalendarViewQuery {
    /// Creates a window query.
    pub fn new(start_date_time: impl Into<String>, end_date_time: impl Into<String>) -> Self {
        Self {
            start_date_time: start_date_time.into(),
            end_date_time: end_date_time.into(),
            odata: ODataQuery::default(),
        }
    }

    /// Sets the collection options.
    pub fn with_odata(mut self, odata: ODataQuery) -> Self {
        self.odata = odata;
        self
    }
}

/// `If-Match` header parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IfMatch {
    /// ETag the server copy must match.
    #[serde(rename = "If-Match", skip_serializing_if = "Option::is_none")]
    pub if_match: Option<String>,
}

impl IfMatch {
    /// Creates the header parameter.
    pub fn new(etag: impl Into<String>) -> Self {
        Self {
            if_match: Some(etag.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_query_serializes_to_empty_object() {
        assert_eq!(serde_json::to_value(ODataQuery::new()).unwrap(), json!({}));
    }

    #[test]
    fn test_odata_query_keys() {
        let query = ODataQuery::new()
            .with_top(10)
            .with_filter("importance eq 'high'")
            .add_select(["subject", "start"]);
        assert_eq!(
            serde_json::to_value(query).unwrap(),
            json!({"$top": 10, "$filter": "importance eq 'high'", "$select": ["subject", "start"]})
        );
    }

    #[test]
    fn test_add_select_appends() {
        let query = GetQuery::new().add_select(["id"]).add_select(["subject"]);
        assert_eq!(query.select, vec!["id", "subject"]);
    }

    #[test]
    fn test_calendar_view_query_flattens_odata() {
        let query = CalendarViewQuery::new("2024-01-01T00:00:00Z", "2024-01-08T00:00:00Z")
            .with_odata(ODataQuery::new().with_top(50));
        assert_eq!(
            serde_json::to_value(query).unwrap(),
            json!({
                "startDateTime": "2024-01-01T00:00:00Z",
                "endDateTime": "2024-01-08T00:00:00Z",
                "$top": 50
            })
        );
    }

    #[test]
    fn test_if_match_key() {
        assert_eq!(
            serde_json::to_value(IfMatch::new("W/\"x\"")).unwrap(),
            json!({"If-Match": "W/\"x\""})
        );
    }
}
