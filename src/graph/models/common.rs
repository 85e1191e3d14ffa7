//! Common types shared across Graph models.
//!
//! This module defines the collection envelope, the error envelope, and the
//! small value types (dates, bodies, e-mail addresses) reused by several
//! resources.

use serde::{Deserialize, Serialize};

/// Extra properties not modelled as fields.
pub type AdditionalProperties = serde_json::Map<String, serde_json::Value>;

/// Envelope for collection responses.
///
/// Graph returns one page at a time. `next_link` carries the absolute URL of
/// the following page; nothing in this crate follows it automatically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection<T> {
    /// The items on this page.
    #[serde(default)]
    pub value: Vec<T>,

    /// OData context URL.
    #[serde(rename = "@odata.context", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,

    /// Total count, present when `$count=true` was requested.
    #[serde(rename = "@odata.count", default, skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,

    /// URL of the next page.
    #[serde(rename = "@odata.nextLink", default, skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,

    /// Delta link returned by delta queries.
    #[serde(rename = "@odata.deltaLink", default, skip_serializing_if = "Option::is_none")]
    pub delta_link: Option<String>,
}

impl<T> Collection<T> {
    /// Returns the next page URL, if any.
    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref()
    }

    /// Returns true if the server reported another page.
    pub fn has_more(&self) -> bool {
        self.next_link.is_some()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Returns true if this page is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl<T> IntoIterator for Collection<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

/// Graph error envelope: `{"error": {"code": ..., "message": ...}}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ODataError {
    /// The error details.
    pub error: ODataErrorDetail,
}

/// Details of a Graph error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ODataErrorDetail {
    /// Machine-readable code (e.g. `ErrorItemNotFound`).
    #[serde(default)]
    pub code: String,

    /// Human-readable message.
    #[serde(default)]
    pub message: String,

    /// Nested inner error, left as raw JSON.
    #[serde(rename = "innerError", default)]
    pub inner_error: Option<serde_json::Value>,
}

impl ODataError {
    /// Parses an error body, e.g. the `body` of `GraphError::HttpStatus`.
    ///
    /// Returns `None` if the body is not a Graph error envelope.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

/// A point in time with its time zone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeTimeZone {
    /// Local date and time, e.g. `2024-01-15T10:00:00.0000000`.
    pub date_time: String,

    /// Time zone name, e.g. `UTC` or `Pacific Standard Time`.
    pub time_zone: String,
}

impl DateTimeTimeZone {
    /// Creates a value.
    pub fn new(date_time: impl Into<String>, time_zone: impl Into<String>) -> Self {
        Self {
            date_time: date_time.into(),
            time_zone: time_zone.into(),
        }
    }

    /// Creates a UTC value.
    pub fn utc(date_time: impl Into<String>) -> Self {
        Self::new(date_time, "UTC")
    }
}

/// Body content type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    /// Plain text.
    #[default]
    Text,
    /// HTML.
    Html,
}

/// Rich text body of an event, message or notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemBody {
    /// Content type.
    #[serde(default)]
    pub content_type: BodyType,

    /// The content.
    #[serde(default)]
    pub content: String,
}

impl ItemBody {
    /// Creates a plain text body.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content_type: BodyType::Text,
            content: content.into(),
        }
    }

    /// Creates an HTML body.
    pub fn html(content: impl Into<String>) -> Self {
        Self {
            content_type: BodyType::Html,
            content: content.into(),
        }
    }
}

/// A name and e-mail address pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress {
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// SMTP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl EmailAddress {
    /// Creates an address without a display name.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            name: None,
            address: Some(address.into()),
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the name, falling back to the address.
    pub fn display(&self) -> &str {
        self.name
            .as_deref()
            .or(self.address.as_deref())
            .unwrap_or("Unknown")
    }
}

/// A recipient wrapper as used by `organizer`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    /// The recipient's address.
    #[serde(default)]
    pub email_address: EmailAddress,
}

/// Identity of a user, application or device.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Object id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Set of identities on a message (`from`, `createdBy`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySet {
    /// User identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Identity>,

    /// Application identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Identity>,
}

impl IdentitySet {
    /// Returns the user or application display name.
    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .or(self.application.as_ref())
            .and_then(|i| i.display_name.as_deref())
            .unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collection_deserialize_with_annotations() {
        let json = json!({
            "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#users",
            "@odata.count": 42,
            "@odata.nextLink": "https://graph.microsoft.com/v1.0/users?$skiptoken=abc",
            "value": [{"id": "1"}, {"id": "2"}]
        });
        let page: Collection<serde_json::Value> = serde_json::from_value(json).unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(page.count, Some(42));
        assert!(page.has_more());
        assert_eq!(
            page.next_link(),
            Some("https://graph.microsoft.com/v1.0/users?$skiptoken=abc")
        );
    }

    #[test]
    fn test_collection_missing_value_is_empty() {
        let page: Collection<serde_json::Value> = serde_json::from_value(json!({})).unwrap();
        assert!(page.is_empty());
        assert!(!page.has_more());
    }

    #[test]
    fn test_odata_error_parse() {
        let body = r#"{"error":{"code":"ErrorItemNotFound","message":"The specified object was not found in the store."}}"#;
        let err = ODataError::parse(body).unwrap();
        assert_eq!(err.error.code, "ErrorItemNotFound");
        assert!(ODataError::parse("<html>bad gateway</html>").is_none());
    }

    #[test]
    fn test_item_body_serialization() {
        assert_eq!(
            serde_json::to_value(ItemBody::html("<b>hi</b>")).unwrap(),
            json!({"contentType": "html", "content": "<b>hi</b>"})
        );
    }

    #[test]
    fn test_email_address_display() {
        let addr = EmailAddress::new("adele@contoso.com");
        assert_eq!(addr.display(), "adele@contoso.com");
        assert_eq!(addr.with_name("Adele Vance").display(), "Adele Vance");
    }

    #[test]
    fn test_identity_set_display_name() {
        let set = IdentitySet {
            user: None,
            application: Some(Identity {
                id: Some("app".to_string()),
                display_name: Some("Build Bot".to_string()),
            }),
        };
        assert_eq!(set.display_name(), "Build Bot");
    }
}
