//! Chat and chat message clients.

use reqwest::Method;

use super::models::{Chat, ChatMessage, Collection};
use super::query::{GetQuery, ODataQuery, GET_PARAMS, LIST_PARAMS, NO_PARAMS};
use super::resource::{Endpoint, ResourceClient};
use crate::cards::AdaptiveCard;
use crate::error::GraphError;
use crate::http::{ClientOptions, HttpClient, RequestConfig};
use crate::url_template::ParamDescriptor;

const CHAT_ID: &str = "chat-id";
const MESSAGE_ID: &str = "chatMessage-id";
const CHAT_PATH: &[ParamDescriptor] = &[ParamDescriptor::path(CHAT_ID)];
const MESSAGE_PATH: &[ParamDescriptor] = &[ParamDescriptor::path(CHAT_ID), ParamDescriptor::path(MESSAGE_ID)];

const ME_CHATS: Endpoint = Endpoint::new("/me/chats", NO_PARAMS, LIST_PARAMS);
const CHATS: Endpoint = Endpoint::new("/chats", NO_PARAMS, LIST_PARAMS);
const CHAT: Endpoint = Endpoint::new("/chats/{chat-id}", CHAT_PATH, GET_PARAMS);
const CHAT_UPDATE: Endpoint = Endpoint::new("/chats/{chat-id}", CHAT_PATH, NO_PARAMS);
const MESSAGES: Endpoint = Endpoint::new("/chats/{chat-id}/messages", CHAT_PATH, LIST_PARAMS);
const MESSAGES_CREATE: Endpoint = Endpoint::new("/chats/{chat-id}/messages", CHAT_PATH, NO_PARAMS);
const MESSAGE: Endpoint = Endpoint::new("/chats/{chat-id}/messages/{chatMessage-id}", MESSAGE_PATH, GET_PARAMS);

/// Attachment id used by [`ChatMessagesClient::send_card`].
pub const CARD_ATTACHMENT_ID: &str = "adaptive-card";

/// Client for `/chats` or `/me/chats`.
#[derive(Debug, Clone)]
pub struct ChatsClient {
    resource: ResourceClient,
    list: &'static Endpoint,
}

impl ChatsClient {
    /// Creates a client for `/chats`.
    ///
    /// # Errors
    ///
    /// Returns an error if a new HTTP client has to be built and fails.
    pub fn new(options: impl Into<ClientOptions>) -> Result<Self, GraphError> {
        Ok(Self {
            resource: ResourceClient::from_options(options)?,
            list: &CHATS,
        })
    }

    pub(crate) fn me(resource: ResourceClient) -> Self {
        Self {
            resource,
            list: &ME_CHATS,
        }
    }

    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// Lists the chats the user is part of.
    pub async fn list(
        &self,
        params: Option<&ODataQuery>,
        config: Option<RequestConfig>,
    ) -> Result<Collection<Chat>, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, self.list, params, None, config)
            .await
    }

    /// `/chats/{chat-id}`
    pub fn chat(&self, chat_id: impl Into<String>) -> ChatClient {
        ChatClient {
            resource: self.resource.child(CHAT_ID, chat_id),
        }
    }
}

/// Client for `/chats/{chat-id}`.
#[derive(Debug, Clone)]
pub struct ChatClient {
    resource: ResourceClient,
}

impl ChatClient {
    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET /chats/{chat-id}`
    pub async fn get(&self, params: Option<&GetQuery>, config: Option<RequestConfig>) -> Result<Chat, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &CHAT, params, None, config)
            .await
    }

    /// `PATCH /chats/{chat-id}`. Only `topic` can be changed; Graph answers
    /// `204 No Content`.
    pub async fn update(&self, body: &Chat, config: Option<RequestConfig>) -> Result<(), GraphError> {
        self.resource
            .send::<(), _, _>(Method::PATCH, &CHAT_UPDATE, None, Some(body), config)
            .await
    }

    /// `/chats/{chat-id}/messages`
    pub fn messages(&self) -> ChatMessagesClient {
        ChatMessagesClient {
            resource: self.resource.clone(),
        }
    }

    /// `/chats/{chat-id}/messages/{chatMessage-id}`
    pub fn message(&self, message_id: impl Into<String>) -> ChatMessageClient {
        ChatMessageClient {
            resource: self.resource.child(MESSAGE_ID, message_id),
        }
    }
}

/// Client for `/chats/{chat-id}/messages`.
#[derive(Debug, Clone)]
pub struct ChatMessagesClient {
    resource: ResourceClient,
}

impl ChatMessagesClient {
    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET /chats/{chat-id}/messages`
    pub async fn list(
        &self,
        params: Option<&ODataQuery>,
        config: Option<RequestConfig>,
    ) -> Result<Collection<ChatMessage>, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &MESSAGES, params, None, config)
            .await
    }

    /// `POST /chats/{chat-id}/messages`
    pub async fn create(&self, body: &ChatMessage, config: Option<RequestConfig>) -> Result<ChatMessage, GraphError> {
        self.resource
            .send::<(), _, _>(Method::POST, &MESSAGES_CREATE, None, Some(body), config)
            .await
    }

    /// Posts `card` as the only attachment of a new message.
    ///
    /// # Errors
    ///
    /// Returns an error if the card cannot be serialized or the request fails.
    pub async fn send_card(&self, card: &AdaptiveCard, config: Option<RequestConfig>) -> Result<ChatMessage, GraphError> {
        let message = ChatMessage::with_card(CARD_ATTACHMENT_ID, card)?;
        self.create(&message, config).await
    }
}

/// Client for `/chats/{chat-id}/messages/{chatMessage-id}`.
#[derive(Debug, Clone)]
pub struct ChatMessageClient {
    resource: ResourceClient,
}

impl ChatMessageClient {
    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET /chats/{chat-id}/messages/{chatMessage-id}`
    pub async fn get(
        &self,
        params: Option<&GetQuery>,
        config: Option<RequestConfig>,
    ) -> Result<ChatMessage, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &MESSAGE, params, None, config)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_me_chats_and_chats_paths() {
        let resource = ResourceClient::new(HttpClient::graph_default().unwrap());
        let me_chats = ChatsClient::me(resource.clone());
        let chats = ChatsClient::new(resource.http()).unwrap();
        assert_eq!(me_chats.list.template, "/me/chats");
        assert_eq!(chats.list.template, "/chats");
        assert!(chats.http().same_as(me_chats.http()));
    }

    #[test]
    fn test_message_captures_both_ids() {
        let chats = ChatsClient::new(ClientOptions::Default).unwrap();
        let message = chats.chat("19:abc@thread.v2").message("1616990032035");
        let resolved = message.resource.resolve::<()>(&MESSAGE, None).unwrap();
        assert_eq!(resolved.url, "/chats/19:abc@thread.v2/messages/1616990032035");
    }

    #[test]
    fn test_messages_list_url() {
        let chats = ChatsClient::new(ClientOptions::Default).unwrap();
        let messages = chats.chat("c1").messages();
        let query = ODataQuery::new().with_top(20).add_orderby(["createdDateTime desc"]);
        let resolved = messages.resource.resolve(&MESSAGES, Some(&query)).unwrap();
        assert_eq!(resolved.url, "/chats/c1/messages?$top=20&$orderby=createdDateTime%20desc");
    }
}
