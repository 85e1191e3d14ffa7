//! Calendar and event models.

use serde::{Deserialize, Serialize};

use super::{AdditionalProperties, DateTimeTimeZone, EmailAddress, ItemBody, Recipient};

/// A calendar (`/me/calendar`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Calendar {
    /// Calendar id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Calendar name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Color theme (`auto`, `lightBlue`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Hex color, e.g. `#FF0000`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,

    /// Whether this is the user's default calendar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_default_calendar: Option<bool>,

    /// Whether the user can write to the calendar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit: Option<bool>,

    /// Calendar owner.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<EmailAddress>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional: AdditionalProperties,
}

/// An attendee type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttendeeType {
    /// Required attendee.
    #[default]
    Required,
    /// Optional attendee.
    Optional,
    /// Room or equipment.
    Resource,
}

/// A response status on an event or attendee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseStatus {
    /// `none`, `organizer`, `tentativelyAccepted`, `accepted`, `declined`,
    /// `notResponded`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,

    /// When the response was sent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// An event attendee.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    /// Attendee address.
    pub email_address: EmailAddress,

    /// Attendee type.
    #[serde(rename = "type", default)]
    pub attendee_type: AttendeeType,

    /// The attendee's response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ResponseStatus>,
}

impl Attendee {
    /// Creates a required attendee.
    pub fn required(address: impl Into<String>) -> Self {
        Self {
            email_address: EmailAddress::new(address),
            attendee_type: AttendeeType::Required,
            status: None,
        }
    }

    /// Creates an optional attendee.
    pub fn optional(address: impl Into<String>) -> Self {
        Self {
            attendee_type: AttendeeType::Optional,
            ..Self::required(address)
        }
    }
}

/// Event location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Location name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional: AdditionalProperties,
}

/// Join information of an online meeting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnlineMeetingInfo {
    /// Join URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_url: Option<String>,
}

/// A calendar event.
///
/// Used for reads and as the create/update body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Event id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Subject line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<ItemBody>,

    /// Text preview of the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_preview: Option<String>,

    /// Start time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTimeTimeZone>,

    /// End time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTimeTimeZone>,

    /// Location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,

    /// Attendees.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attendees: Vec<Attendee>,

    /// Organizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer: Option<Recipient>,

    /// All-day flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_all_day: Option<bool>,

    /// Cancelled flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_cancelled: Option<bool>,

    /// Whether the event has an online meeting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_online_meeting: Option<bool>,

    /// Online meeting provider, e.g. `teamsForBusiness`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_meeting_provider: Option<String>,

    /// Online meeting join info.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub online_meeting: Option<OnlineMeetingInfo>,

    /// Free/busy status: `free`, `tentative`, `busy`, `oof`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_as: Option<String>,

    /// `low`, `normal`, `high`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<String>,

    /// The signed-in user's response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_status: Option<ResponseStatus>,

    /// Categories.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub categories: Vec<String>,

    /// Link to the event in Outlook on the web.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_link: Option<String>,

    /// Version marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_key: Option<String>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional: AdditionalProperties,
}

impl Event {
    /// Creates an event with a subject and time window.
    pub fn new(subject: impl Into<String>, start: DateTimeTimeZone, end: DateTimeTimeZone) -> Self {
        Self {
            subject: Some(subject.into()),
            start: Some(start),
            end: Some(end),
            ..Default::default()
        }
    }

    /// Sets the body.
    pub fn with_body(mut self, body: ItemBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Appends attendees.
    pub fn add_attendees(mut self, attendees: impl IntoIterator<Item = Attendee>) -> Self {
        self.attendees.extend(attendees);
        self
    }

    /// Sets the location name.
    pub fn with_location(mut self, name: impl Into<String>) -> Self {
        self.location = Some(Location {
            display_name: Some(name.into()),
            additional: AdditionalProperties::new(),
        });
        self
    }

    /// Makes the event a Teams meeting.
    pub fn with_teams_meeting(mut self) -> Self {
        self.is_online_meeting = Some(true);
        self.online_meeting_provider = Some("teamsForBusiness".to_string());
        self
    }

    /// Returns the subject or a placeholder.
    pub fn display_subject(&self) -> &str {
        self.subject.as_deref().unwrap_or("(No subject)")
    }
}

/// A proposed alternative time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Start.
    pub start: DateTimeTimeZone,
    /// End.
    pub end: DateTimeTimeZone,
}

/// Body of `accept`, `decline` and `tentativelyAccept`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventResponse {
    /// Text included in the response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Whether to send a response to the organizer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_response: Option<bool>,

    /// Alternative time, for `decline` and `tentativelyAccept`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proposed_new_time: Option<TimeSlot>,
}

impl EventResponse {
    /// Creates an empty response.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Sets whether a response is sent to the organizer.
    pub fn with_send_response(mut self, send: bool) -> Self {
        self.send_response = Some(send);
        self
    }

    /// Proposes another time.
    pub fn with_proposed_new_time(mut self, start: DateTimeTimeZone, end: DateTimeTimeZone) -> Self {
        self.proposed_new_time = Some(TimeSlot { start, end });
        self
    }
}

/// Body of `cancel`. Only the organizer can cancel a meeting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelEvent {
    /// Message sent to the attendees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CancelEvent {
    /// Creates the body with a comment.
    pub fn new(comment: impl Into<String>) -> Self {
        Self {
            comment: Some(comment.into()),
        }
    }
}
