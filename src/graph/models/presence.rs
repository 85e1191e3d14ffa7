//! Presence models.

use serde::{Deserialize, Serialize};

use super::{AdditionalProperties, DateTimeTimeZone, ItemBody};

/// A user's presence (`/me/presence`, `/users/{id}/presence`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presence {
    /// User id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Base presence: `Available`, `Busy`, `Away`, `DoNotDisturb`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,

    /// Supplemental activity: `InACall`, `InAMeeting`, `Presenting`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<String>,

    /// Status message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_message: Option<PresenceStatusMessage>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional: AdditionalProperties,
}

impl Presence {
    /// Returns the availability or `PresenceUnknown`.
    pub fn display_availability(&self) -> &str {
        self.availability.as_deref().unwrap_or("PresenceUnknown")
    }
}

/// A presence status message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresenceStatusMessage {
    /// Message body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ItemBody>,

    /// When the message expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date_time: Option<DateTimeTimeZone>,

    /// When the message was published. Read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date_time: Option<String>,
}

impl PresenceStatusMessage {
    /// Creates a plain text status message.
    pub fn text(message: impl Into<String>) -> Self {
        Self {
            message: Some(ItemBody::text(message)),
            ..Default::default()
        }
    }

    /// Sets the expiry.
    pub fn with_expiry(mut self, expiry: DateTimeTimeZone) -> Self {
        self.expiry_date_time = Some(expiry);
        self
    }
}

/// Body of `setPresence`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPresence {
    /// Application (client) id of the caller.
    pub session_id: String,

    /// Availability to set.
    pub availability: String,

    /// Activity to set.
    pub activity: String,

    /// ISO 8601 duration, e.g. `PT1H`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_duration: Option<String>,
}

impl SetPresence {
    /// Creates the body.
    pub fn new(
        session_id: impl Into<String>,
        availability: impl Into<String>,
        activity: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            availability: availability.into(),
            activity: activity.into(),
            expiration_duration: None,
        }
    }

    /// Sets how long the presence lasts.
    pub fn with_expiration_duration(mut self, duration: impl Into<String>) -> Self {
        self.expiration_duration = Some(duration.into());
        self
    }
}

/// Body of `clearPresence`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearPresence {
    /// Application (client) id of the caller.
    pub session_id: String,
}

impl ClearPresence {
    /// Creates the body.
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
        }
    }
}

/// Body of `setUserPreferredPresence`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetPreferredPresence {
    /// Availability to set.
    pub availability: String,

    /// Activity to set.
    pub activity: String,

    /// ISO 8601 duration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_duration: Option<String>,
}

/// Body of `setStatusMessage`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetStatusMessage {
    /// The message to publish.
    pub status_message: PresenceStatusMessage,
}

/// Body of `getPresencesByUserId`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetPresencesByUserId {
    /// User object ids.
    pub ids: Vec<String>,
}

impl GetPresencesByUserId {
    /// Creates the body.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_presence_deserialize() {
        let presence: Presence = serde_json::from_value(json!({
            "id": "fa8bf3dc-eca7-46b7-bad1-db199b62afc3",
            "availability": "Busy",
            "activity": "InAMeeting",
            "statusMessage": null
        }))
        .unwrap();
        assert_eq!(presence.display_availability(), "Busy");
        assert!(presence.status_message.is_none());
    }

    #[test]
    fn test_set_presence_body() {
        let body = SetPresence::new("22553876-f5ab-4529-bffb-cfe50aa89f87", "Busy", "InACall")
            .with_expiration_duration("PT1H");
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "sessionId": "22553876-f5ab-4529-bffb-cfe50aa89f87",
                "availability": "Busy",
                "activity": "InACall",
                "expirationDuration": "PT1H"
            })
        );
    }

    #[test]
    fn test_set_status_message_body() {
        let body = SetStatusMessage {
            status_message: PresenceStatusMessage::text("Out for lunch")
                .with_expiry(DateTimeTimeZone::utc("2024-01-15T13:00:00")),
        };
        let json = serde_json::to_value(body).unwrap();
        assert_eq!(json["statusMessage"]["message"]["content"], "Out for lunch");
        assert_eq!(json["statusMessage"]["expiryDateTime"]["timeZone"], "UTC");
        assert!(json["statusMessage"].get("publishedDateTime").is_none());
    }

    #[test]
    fn test_get_presences_by_user_id_body() {
        let body = GetPresencesByUserId::new(["a", "b"]);
        assert_eq!(serde_json::to_value(body).unwrap(), json!({"ids": ["a", "b"]}));
    }
}
