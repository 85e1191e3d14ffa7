//! Chat and chat message models.

use serde::{Deserialize, Serialize};

use super::{AdditionalProperties, IdentitySet, ItemBody};
use crate::cards::{AdaptiveCard, CardAttachment};

/// A one-on-one, group or meeting chat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    /// Chat id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Topic, only set for group chats.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,

    /// `oneOnOne`, `group` or `meeting`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_type: Option<String>,

    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,

    /// Last change time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_date_time: Option<String>,

    /// Link to the chat in Teams.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional: AdditionalProperties,
}

/// An attachment on a chat message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageAttachment {
    /// Attachment id, referenced from the body as `<attachment id="...">`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// MIME type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    /// Content as a JSON string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// URL of file content.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,

    /// File name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ChatMessageAttachment {
    /// Wraps an Adaptive Card. Graph expects the card serialized to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the card cannot be serialized.
    pub fn from_card(id: impl Into<String>, card: &AdaptiveCard) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: Some(id.into()),
            content_type: Some(CardAttachment::CONTENT_TYPE.to_string()),
            content: Some(serde_json::to_string(card)?),
            content_url: None,
            name: None,
        })
    }
}

/// A message in a chat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Message id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Message body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<ItemBody>,

    /// Subject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Sender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<IdentitySet>,

    /// `message`, `systemEventMessage`, ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,

    /// `normal`, `high` or `urgent`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub importance: Option<String>,

    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,

    /// Attachments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<ChatMessageAttachment>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional: AdditionalProperties,
}

impl ChatMessage {
    /// Creates a plain text message.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            body: Some(ItemBody::text(content)),
            ..Default::default()
        }
    }

    /// Creates an HTML message.
    pub fn html(content: impl Into<String>) -> Self {
        Self {
            body: Some(ItemBody::html(content)),
            ..Default::default()
        }
    }

    /// Creates a message carrying one Adaptive Card.
    ///
    /// The body is the HTML reference `<attachment id="..."></attachment>`
    /// that Teams requires for every attachment.
    ///
    /// # Errors
    ///
    /// Returns an error if the card cannot be serialized.
    pub fn with_card(attachment_id: &str, card: &AdaptiveCard) -> Result<Self, serde_json::Error> {
        let attachment = ChatMessageAttachment::from_card(attachment_id, card)?;
        Ok(Self {
            body: Some(ItemBody::html(format!(
                "<attachment id=\"{attachment_id}\"></attachment>"
            ))),
            attachments: vec![attachment],
            ..Default::default()
        })
    }

    /// Returns the sender's display name.
    pub fn sender(&self) -> &str {
        self.from
            .as_ref()
            .map(IdentitySet::display_name)
            .unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::TextBlock;
    use crate::graph::models::BodyType;
    use serde_json::json;

    #[test]
    fn test_text_message_body() {
        assert_eq!(
            serde_json::to_value(ChatMessage::text("Hello")).unwrap(),
            json!({"body": {"contentType": "text", "content": "Hello"}})
        );
    }

    #[test]
    fn test_card_message() {
        let card = AdaptiveCard::new().add_body([TextBlock::new("Build passed").into()]);
        let message = ChatMessage::with_card("card-1", &card).unwrap();

        let body = message.body.as_ref().unwrap();
        assert_eq!(body.content_type, BodyType::Html);
        assert_eq!(body.content, "<attachment id=\"card-1\"></attachment>");

        let attachment = &message.attachments[0];
        assert_eq!(attachment.id.as_deref(), Some("card-1"));
        assert_eq!(
            attachment.content_type.as_deref(),
            Some("application/vnd.microsoft.card.adaptive")
        );
        let content: serde_json::Value =
            serde_json::from_str(attachment.content.as_deref().unwrap()).unwrap();
        assert_eq!(content["type"], "AdaptiveCard");
        assert_eq!(content["body"][0]["text"], "Build passed");
    }

    #[test]
    fn test_message_sender() {
        let message: ChatMessage = serde_json::from_value(json!({
            "id": "1616990032035",
            "messageType": "message",
            "from": {"user": {"id": "8ea0e38b", "displayName": "Robin Kline"}},
            "body": {"contentType": "html", "content": "<p>Hi</p>"}
        }))
        .unwrap();
        assert_eq!(message.sender(), "Robin Kline");
        assert_eq!(ChatMessage::text("x").sender(), "Unknown");
    }
}
