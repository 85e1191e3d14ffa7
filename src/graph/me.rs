//! The signed-in user (`/me`) and the navigation root below it.

use reqwest::Method;

use super::calendar::{EventsClient, MeCalendarClient};
use super::chats::ChatsClient;
use super::models::User;
use super::presence::PresenceClient;
use super::query::{GetQuery, GET_PARAMS, NO_PARAMS};
use super::resource::{Endpoint, ResourceClient};
use super::teamwork::TeamworkClient;
use crate::error::GraphError;
use crate::http::{ClientOptions, HttpClient, RequestConfig};

const ME: Endpoint = Endpoint::new("/me", NO_PARAMS, GET_PARAMS);
const ME_UPDATE: Endpoint = Endpoint::new("/me", NO_PARAMS, NO_PARAMS);

/// Client for `/me`.
///
/// # Example
///
/// ```ignore
/// use graph_cards::graph::MeClient;
/// use graph_cards::http::HttpConfig;
///
/// let me = MeClient::new(HttpConfig::new().with_bearer_token(token))?;
/// let user = me.get(None, None).await?;
/// let events = me.calendar().calendar_view().list(&window, None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct MeClient {
    resource: ResourceClient,
}

impl MeClient {
    /// Creates the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a new HTTP client has to be built and fails.
    pub fn new(options: impl Into<ClientOptions>) -> Result<Self, GraphError> {
        Ok(Self {
            resource: ResourceClient::from_options(options)?,
        })
    }

    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET /me`
    pub async fn get(&self, params: Option<&GetQuery>, config: Option<RequestConfig>) -> Result<User, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &ME, params, None, config)
            .await
    }

    /// `PATCH /me`. Graph answers `204 No Content`.
    pub async fn update(&self, body: &User, config: Option<RequestConfig>) -> Result<(), GraphError> {
        self.resource
            .send::<(), _, _>(Method::PATCH, &ME_UPDATE, None, Some(body), config)
            .await
    }

    /// `/me/calendar`
    pub fn calendar(&self) -> MeCalendarClient {
        MeCalendarClient::from_resource(self.resource.clone())
    }

    /// `/me/events`
    pub fn events(&self) -> EventsClient {
        EventsClient::from_resource(self.resource.clone())
    }

    /// `/me/presence`
    pub fn presence(&self) -> PresenceClient {
        PresenceClient::me(self.resource.clone())
    }

    /// `/me/teamwork`
    pub fn teamwork(&self) -> TeamworkClient {
        TeamworkClient::from_resource(self.resource.clone())
    }

    /// `/me/chats`
    pub fn chats(&self) -> ChatsClient {
        ChatsClient::me(self.resource.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpConfig;

    #[test]
    fn test_new_with_config_uses_base_url() {
        let me = MeClient::new(HttpConfig::new().with_base_url("http://localhost:9999/v1.0")).unwrap();
        assert_eq!(me.http().base_url(), "http://localhost:9999/v1.0");
    }

    #[test]
    fn test_navigation_shares_client() {
        let me = MeClient::new(ClientOptions::Default).unwrap();
        assert!(me.calendar().http().same_as(me.http()));
        assert!(me.events().http().same_as(me.http()));
        assert!(me.presence().http().same_as(me.http()));
        assert!(me.teamwork().http().same_as(me.http()));
        assert!(me.chats().http().same_as(me.http()));
    }

    #[test]
    fn test_deep_navigation_shares_client() {
        let me = MeClient::new(ClientOptions::Default).unwrap();
        let accept = me.calendar().calendar_view().accept("AAMkAGI1");
        assert!(accept.http().same_as(me.http()));
        assert_eq!(accept.http().base_url(), me.http().base_url());
        assert_eq!(accept.http().headers(), me.http().headers());
        assert_eq!(accept.path().unwrap(), "/me/calendar/calendarView/AAMkAGI1/accept");
    }

    #[test]
    fn test_get_url_with_select() {
        let me = MeClient::new(ClientOptions::Default).unwrap();
        let query = GetQuery::new().add_select(["displayName", "mail"]);
        let resolved = me.resource.resolve(&ME, Some(&query)).unwrap();
        assert_eq!(resolved.url, "/me?$select=displayName,mail");
    }
}
