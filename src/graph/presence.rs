//! Presence, users and communications clients.

use reqwest::Method;

use super::models::{
    ClearPresence, Collection, GetPresencesByUserId, Presence, SetPreferredPresence, SetPresence,
    SetStatusMessage, User,
};
use super::query::{GetQuery, ODataQuery, GET_PARAMS, LIST_PARAMS, NO_PARAMS};
use super::resource::{ActionClient, Endpoint, ResourceClient};
use crate::error::GraphError;
use crate::http::{ClientOptions, HttpClient, RequestConfig};
use crate::url_template::ParamDescriptor;

const USER_ID: &str = "user-id";
const USER_PATH: &[ParamDescriptor] = &[ParamDescriptor::path(USER_ID)];

const USERS: Endpoint = Endpoint::new("/users", NO_PARAMS, LIST_PARAMS);
const USER: Endpoint = Endpoint::new("/users/{user-id}", USER_PATH, GET_PARAMS);
const GET_PRESENCES_BY_USER_ID: Endpoint =
    Endpoint::new("/communications/getPresencesByUserId", NO_PARAMS, NO_PARAMS);

/// Client for a presence action path.
pub type PresenceActionClient<B> = ActionClient<B>;

/// The presence paths for one owner.
struct PresenceEndpoints {
    presence: Endpoint,
    set_presence: Endpoint,
    clear_presence: Endpoint,
    set_status_message: Endpoint,
    set_user_preferred_presence: Endpoint,
    clear_user_preferred_presence: Endpoint,
}

const ME_PRESENCE: PresenceEndpoints = PresenceEndpoints {
    presence: Endpoint::new("/me/presence", NO_PARAMS, NO_PARAMS),
    set_presence: Endpoint::new("/me/presence/setPresence", NO_PARAMS, NO_PARAMS),
    clear_presence: Endpoint::new("/me/presence/clearPresence", NO_PARAMS, NO_PARAMS),
    set_status_message: Endpoint::new("/me/presence/setStatusMessage", NO_PARAMS, NO_PARAMS),
    set_user_preferred_presence: Endpoint::new("/me/presence/setUserPreferredPresence", NO_PARAMS, NO_PARAMS),
    clear_user_preferred_presence: Endpoint::new(
        "/me/presence/clearUserPreferredPresence",
        NO_PARAMS,
        NO_PARAMS,
    ),
};

const USER_PRESENCE: PresenceEndpoints = PresenceEndpoints {
    presence: Endpoint::new("/users/{user-id}/presence", USER_PATH, NO_PARAMS),
    set_presence: Endpoint::new("/users/{user-id}/presence/setPresence", USER_PATH, NO_PARAMS),
    clear_presence: Endpoint::new("/users/{user-id}/presence/clearPresence", USER_PATH, NO_PARAMS),
    set_status_message: Endpoint::new("/users/{user-id}/presence/setStatusMessage", USER_PATH, NO_PARAMS),
    set_user_preferred_presence: Endpoint::new(
        "/users/{user-id}/presence/setUserPreferredPresence",
        USER_PATH,
        NO_PARAMS,
    ),
    clear_user_preferred_presence: Endpoint::new(
        "/users/{user-id}/presence/clearUserPreferredPresence",
        USER_PATH,
        NO_PARAMS,
    ),
};

/// Client for `/me/presence` or `/users/{user-id}/presence`.
#[derive(Clone)]
pub struct PresenceClient {
    resource: ResourceClient,
    endpoints: &'static PresenceEndpoints,
}

impl PresenceClient {
    pub(crate) fn me(resource: ResourceClient) -> Self {
        Self {
            resource,
            endpoints: &ME_PRESENCE,
        }
    }

    pub(crate) fn user(resource: ResourceClient) -> Self {
        Self {
            resource,
            endpoints: &USER_PRESENCE,
        }
    }

    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET .../presence`
    pub async fn get(&self, config: Option<RequestConfig>) -> Result<Presence, GraphError> {
        self.resource
            .send::<(), (), _>(Method::GET, &self.endpoints.presence, None, None, config)
            .await
    }

    /// `.../presence/setPresence`, the presence of an application session.
    pub fn set_presence(&self) -> PresenceActionClient<SetPresence> {
        ActionClient::new(self.resource.clone(), &self.endpoints.set_presence)
    }

    /// `.../presence/clearPresence`
    pub fn clear_presence(&self) -> PresenceActionClient<ClearPresence> {
        ActionClient::new(self.resource.clone(), &self.endpoints.clear_presence)
    }

    /// `.../presence/setStatusMessage`
    pub fn set_status_message(&self) -> PresenceActionClient<SetStatusMessage> {
        ActionClient::new(self.resource.clone(), &self.endpoints.set_status_message)
    }

    /// `.../presence/setUserPreferredPresence`
    pub fn set_user_preferred_presence(&self) -> PresenceActionClient<SetPreferredPresence> {
        ActionClient::new(self.resource.clone(), &self.endpoints.set_user_preferred_presence)
    }

    /// `.../presence/clearUserPreferredPresence`. Takes no body.
    pub fn clear_user_preferred_presence(&self) -> PresenceActionClient<()> {
        ActionClient::new(self.resource.clone(), &self.endpoints.clear_user_preferred_presence)
    }
}

impl std::fmt::Debug for PresenceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PresenceClient")
            .field("template", &self.endpoints.presence.template)
            .field("captured", self.resource.captured())
            .finish()
    }
}

/// Client for `/users`.
#[derive(Debug, Clone)]
pub struct UsersClient {
    resource: ResourceClient,
}

impl UsersClient {
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

    /// `GET /users`
    pub async fn list(
        &self,
        params: Option<&ODataQuery>,
        config: Option<RequestConfig>,
    ) -> Result<Collection<User>, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &USERS, params, None, config)
            .await
    }

    /// `/users/{user-id}`. Accepts an object id or a user principal name.
    pub fn user(&self, user_id: impl Into<String>) -> UserClient {
        UserClient {
            resource: self.resource.child(USER_ID, user_id),
        }
    }
}

/// Client for `/users/{user-id}`.
#[derive(Debug, Clone)]
pub struct UserClient {
    resource: ResourceClient,
}

impl UserClient {
    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET /users/{user-id}`
    pub async fn get(&self, params: Option<&GetQuery>, config: Option<RequestConfig>) -> Result<User, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &USER, params, None, config)
            .await
    }

    /// `/users/{user-id}/presence`
    pub fn presence(&self) -> PresenceClient {
        PresenceClient::user(self.resource.clone())
    }
}

/// Client for `/communications`.
#[derive(Debug, Clone)]
pub struct CommunicationsClient {
    resource: ResourceClient,
}

impl CommunicationsClient {
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

    /// `/communications/getPresencesByUserId`, presence for many users in one
    /// call.
    pub fn get_presences_by_user_id(&self) -> ActionClient<GetPresencesByUserId, Collection<Presence>> {
        ActionClient::new(self.resource.clone(), &GET_PRESENCES_BY_USER_ID)
    }
}
