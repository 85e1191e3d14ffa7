//! Virtual event models (webinars and town halls).

use serde::{Deserialize, Serialize};

use super::{AdditionalProperties, DateTimeTimeZone, IdentitySet, ItemBody};

/// A webinar or town hall.
///
/// Both share this shape; the kind is carried by `@odata.type` in
/// `additional`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualEvent {
    /// Event id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<ItemBody>,

    /// Start time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<DateTimeTimeZone>,

    /// End time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateTimeTimeZone>,

    /// `draft`, `published` or `canceled`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Creator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentitySet>,

    /// Town hall audience: `organization` or `everyone`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,

    /// Webinar audience: `organization` or `everyone`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional: AdditionalProperties,
}

impl VirtualEvent {
    /// Creates a draft event body.
    pub fn new(display_name: impl Into<String>, start: DateTimeTimeZone, end: DateTimeTimeZone) -> Self {
        Self {
            display_name: Some(display_name.into()),
            start_date_time: Some(start),
            end_date_time: Some(end),
            ..Default::default()
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: ItemBody) -> Self {
        self.description = Some(description);
        self
    }
}

/// A session of a virtual event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualEventSession {
    /// Session id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Start time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<DateTimeTimeZone>,

    /// End time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateTimeTimeZone>,

    /// Join URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_web_url: Option<String>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional: AdditionalProperties,
}

/// A registration for a webinar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualEventRegistration {
    /// Registration id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Registrant user id, for internal registrants.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// First name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    /// Last name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// E-mail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// `registered`, `canceled`, `waitlisted`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Registration time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_date_time: Option<String>,

    /// Cancellation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancelation_date_time: Option<String>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional: AdditionalProperties,
}

impl VirtualEventRegistration {
    /// Registration body for an external attendee.
    pub fn external(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_webinar_deserialize_keeps_odata_type() {
        let webinar: VirtualEvent = serde_json::from_value(json!({
            "@odata.type": "#microsoft.graph.virtualEventWebinar",
            "id": "88b245ac-b0b2-f1b4-6e1b-77b6a82d4bcc@a1a56d21",
            "displayName": "The Impact of Tech on Our Lives",
            "status": "published",
            "audience": "everyone"
        }))
        .unwrap();
        assert_eq!(webinar.status.as_deref(), Some("published"));
        assert_eq!(
            webinar.additional["@odata.type"],
            "#microsoft.graph.virtualEventWebinar"
        );
    }

    #[test]
    fn test_external_registration_body() {
        let registration = VirtualEventRegistration::external("Emilee", "Pham", "emilee@contoso.com");
        assert_eq!(
            serde_json::to_value(registration).unwrap(),
            json!({"firstName": "Emilee", "lastName": "Pham", "email": "emilee@contoso.com"})
        );
    }

    #[test]
    fn test_new_event_body() {
        let event = VirtualEvent::new(
            "All hands",
            DateTimeTimeZone::utc("2024-03-01T17:00:00"),
            DateTimeTimeZone::utc("2024-03-01T18:00:00"),
        )
        .with_description(ItemBody::text("Quarterly update"));
        let json = serde_json::to_value(event).unwrap();
        assert_eq!(json["displayName"], "All hands");
        assert_eq!(json["startDateTime"]["dateTime"], "2024-03-01T17:00:00");
        assert_eq!(json["description"]["content"], "Quarterly update");
    }
}
