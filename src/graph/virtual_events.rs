//! Virtual event clients (`/solutions/virtualEvents`).

use reqwest::Method;

use super::models::{Collection, VirtualEvent, VirtualEventRegistration, VirtualEventSession};
use super::query::{GetQuery, ODataQuery, GET_PARAMS, LIST_PARAMS, NO_PARAMS};
use super::resource::{ActionClient, Endpoint, ResourceClient};
use crate::error::GraphError;
use crate::http::{ClientOptions, HttpClient, RequestConfig};
use crate::url_template::ParamDescriptor;

const WEBINAR_ID: &str = "virtualEventWebinar-id";
const TOWNHALL_ID: &str = "virtualEventTownhall-id";
const SESSION_ID: &str = "virtualEventSession-id";
const REGISTRATION_ID: &str = "virtualEventRegistration-id";

const WEBINAR_PATH: &[ParamDescriptor] = &[ParamDescriptor::path(WEBINAR_ID)];
const TOWNHALL_PATH: &[ParamDescriptor] = &[ParamDescriptor::path(TOWNHALL_ID)];
const SESSION_PATH: &[ParamDescriptor] = &[ParamDescriptor::path(WEBINAR_ID), ParamDescriptor::path(SESSION_ID)];
const REGISTRATION_PATH: &[ParamDescriptor] = &[
    ParamDescriptor::path(WEBINAR_ID),
    ParamDescriptor::path(REGISTRATION_ID),
];

const WEBINARS: Endpoint = Endpoint::new("/solutions/virtualEvents/webinars", NO_PARAMS, LIST_PARAMS);
const WEBINARS_CREATE: Endpoint = Endpoint::new("/solutions/virtualEvents/webinars", NO_PARAMS, NO_PARAMS);
const WEBINAR: Endpoint = Endpoint::new(
    "/solutions/virtualEvents/webinars/{virtualEventWebinar-id}",
    WEBINAR_PATH,
    GET_PARAMS,
);
const WEBINAR_WRITE: Endpoint = Endpoint::new(
    "/solutions/virtualEvents/webinars/{virtualEventWebinar-id}",
    WEBINAR_PATH,
    NO_PARAMS,
);
const SESSIONS: Endpoint = Endpoint::new(
    "/solutions/virtualEvents/webinars/{virtualEventWebinar-id}/sessions",
    WEBINAR_PATH,
    LIST_PARAMS,
);
const SESSION: Endpoint = Endpoint::new(
    "/solutions/virtualEvents/webinars/{virtualEventWebinar-id}/sessions/{virtualEventSession-id}",
    SESSION_PATH,
    GET_PARAMS,
);
const REGISTRATIONS: Endpoint = Endpoint::new(
    "/solutions/virtualEvents/webinars/{virtualEventWebinar-id}/registrations",
    WEBINAR_PATH,
    LIST_PARAMS,
);
const REGISTRATIONS_CREATE: Endpoint = Endpoint::new(
    "/solutions/virtualEvents/webinars/{virtualEventWebinar-id}/registrations",
    WEBINAR_PATH,
    NO_PARAMS,
);
const REGISTRATION: Endpoint = Endpoint::new(
    "/solutions/virtualEvents/webinars/{virtualEventWebinar-id}/registrations/{virtualEventRegistration-id}",
    REGISTRATION_PATH,
    GET_PARAMS,
);
const REGISTRATION_CANCEL: Endpoint = Endpoint::new(
    "/solutions/virtualEvents/webinars/{virtualEventWebinar-id}/registrations/{virtualEventRegistration-id}/cancel",
    REGISTRATION_PATH,
    NO_PARAMS,
);

const TOWNHALLS: Endpoint = Endpoint::new("/solutions/virtualEvents/townhalls", NO_PARAMS, LIST_PARAMS);
const TOWNHALLS_CREATE: Endpoint = Endpoint::new("/solutions/virtualEvents/townhalls", NO_PARAMS, NO_PARAMS);
const TOWNHALL: Endpoint = Endpoint::new(
    "/solutions/virtualEvents/townhalls/{virtualEventTownhall-id}",
    TOWNHALL_PATH,
    GET_PARAMS,
);
const TOWNHALL_WRITE: Endpoint = Endpoint::new(
    "/solutions/virtualEvents/townhalls/{virtualEventTownhall-id}",
    TOWNHALL_PATH,
    NO_PARAMS,
);

/// Client for `/solutions/virtualEvents`.
#[derive(Debug, Clone)]
pub struct VirtualEventsClient {
    resource: ResourceClient,
}

impl VirtualEventsClient {
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

    /// `/solutions/virtualEvents/webinars`
    pub fn webinars(&self) -> WebinarsClient {
        WebinarsClient {
            resource: self.resource.clone(),
        }
    }

    /// `/solutions/virtualEvents/webinars/{virtualEventWebinar-id}`
    pub fn webinar(&self, webinar_id: impl Into<String>) -> WebinarClient {
        self.webinars().webinar(webinar_id)
    }

    /// `/solutions/virtualEvents/townhalls`
    pub fn townhalls(&self) -> TownhallsClient {
        TownhallsClient {
            resource: self.resource.clone(),
        }
    }

    /// `/solutions/virtualEvents/townhalls/{virtualEventTownhall-id}`
    pub fn townhall(&self, townhall_id: impl Into<String>) -> TownhallClient {
        self.townhalls().townhall(townhall_id)
    }
}

/// Client for `/solutions/virtualEvents/webinars`.
#[derive(Debug, Clone)]
pub struct WebinarsClient {
    resource: ResourceClient,
}

impl WebinarsClient {
    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET /solutions/virtualEvents/webinars`
    pub async fn list(
        &self,
        params: Option<&ODataQuery>,
        config: Option<RequestConfig>,
    ) -> Result<Collection<VirtualEvent>, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &WEBINARS, params, None, config)
            .await
    }

    /// `POST /solutions/virtualEvents/webinars`, creates a draft webinar.
    pub async fn create(&self, body: &VirtualEvent, config: Option<RequestConfig>) -> Result<VirtualEvent, GraphError> {
        self.resource
            .send::<(), _, _>(Method::POST, &WEBINARS_CREATE, None, Some(body), config)
            .await
    }

    /// `/solutions/virtualEvents/webinars/{virtualEventWebinar-id}`
    pub fn webinar(&self, webinar_id: impl Into<String>) -> WebinarClient {
        WebinarClient {
            resource: self.resource.child(WEBINAR_ID, webinar_id),
        }
    }
}

/// Client for one webinar.
#[derive(Debug, Clone)]
pub struct WebinarClient {
    resource: ResourceClient,
}

impl WebinarClient {
    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET .../webinars/{id}`
    pub async fn get(&self, params: Option<&GetQuery>, config: Option<RequestConfig>) -> Result<VirtualEvent, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &WEBINAR, params, None, config)
            .await
    }

    /// `PATCH .../webinars/{id}`. Graph answers `204 No Content`.
    pub async fn update(&self, body: &VirtualEvent, config: Option<RequestConfig>) -> Result<(), GraphError> {
        self.resource
            .send::<(), _, _>(Method::PATCH, &WEBINAR_WRITE, None, Some(body), config)
            .await
    }

    /// `DELETE .../webinars/{id}`
    pub async fn delete(&self, config: Option<RequestConfig>) -> Result<(), GraphError> {
        self.resource
            .send::<(), (), _>(Method::DELETE, &WEBINAR_WRITE, None, None, config)
            .await
    }

    /// `.../webinars/{id}/sessions`
    pub fn sessions(&self) -> SessionsClient {
        SessionsClient {
            resource: self.resource.clone(),
        }
    }

    /// `.../webinars/{id}/sessions/{virtualEventSession-id}`
    pub fn session(&self, session_id: impl Into<String>) -> SessionClient {
        SessionClient {
            resource: self.resource.child(SESSION_ID, session_id),
        }
    }

    /// `.../webinars/{id}/registrations`
    pub fn registrations(&self) -> RegistrationsClient {
        RegistrationsClient {
            resource: self.resource.clone(),
        }
    }

    /// `.../webinars/{id}/registrations/{virtualEventRegistration-id}`
    pub fn registration(&self, registration_id: impl Into<String>) -> RegistrationClient {
        RegistrationClient {
            resource: self.resource.child(REGISTRATION_ID, registration_id),
        }
    }
}

/// Client for the sessions of a webinar.
#[derive(Debug, Clone)]
pub struct SessionsClient {
    resource: ResourceClient,
}

impl SessionsClient {
    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET .../sessions`
    pub async fn list(
        &self,
        params: Option<&ODataQuery>,
        config: Option<RequestConfig>,
    ) -> Result<Collection<VirtualEventSession>, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &SESSIONS, params, None, config)
            .await
    }
}

/// Client for one webinar session.
#[derive(Debug, Clone)]
pub struct SessionClient {
    resource: ResourceClient,
}

impl SessionClient {
    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET .../sessions/{id}`
    pub async fn get(
        &self,
        params: Option<&GetQuery>,
        config: Option<RequestConfig>,
    ) -> Result<VirtualEventSession, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &SESSION, params, None, config)
            .await
    }
}

/// Client for the registrations of a webinar.
#[derive(Debug, Clone)]
pub struct RegistrationsClient {
    resource: ResourceClient,
}

impl RegistrationsClient {
    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET .../registrations`
    pub async fn list(
        &self,
        params: Option<&ODataQuery>,
        config: Option<RequestConfig>,
    ) -> Result<Collection<VirtualEventRegistration>, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &REGISTRATIONS, params, None, config)
            .await
    }

    /// `POST .../registrations`
    pub async fn create(
        &self,
        body: &VirtualEventRegistration,
        config: Option<RequestConfig>,
    ) -> Result<VirtualEventRegistration, GraphError> {
        self.resource
            .send::<(), _, _>(Method::POST, &REGISTRATIONS_CREATE, None, Some(body), config)
            .await
    }
}

/// Client for one webinar registration.
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    resource: ResourceClient,
}

impl RegistrationClient {
    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET .../registrations/{id}`
    pub async fn get(
        &self,
        params: Option<&GetQuery>,
        config: Option<RequestConfig>,
    ) -> Result<VirtualEventRegistration, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &REGISTRATION, params, None, config)
            .await
    }

    /// `.../registrations/{id}/cancel`. Takes no body.
    pub fn cancel(&self) -> ActionClient<()> {
        ActionClient::new(self.resource.clone(), &REGISTRATION_CANCEL)
    }
}

/// Client for `/solutions/virtualEvents/townhalls`.
#[derive(Debug, Clone)]
pub struct TownhallsClient {
    resource: ResourceClient,
}

impl TownhallsClient {
    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET /solutions/virtualEvents/townhalls`
    pub async fn list(
        &self,
        params: Option<&ODataQuery>,
        config: Option<RequestConfig>,
    ) -> Result<Collection<VirtualEvent>, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &TOWNHALLS, params, None, config)
            .await
    }

    /// `POST /solutions/virtualEvents/townhalls`
    pub async fn create(&self, body: &VirtualEvent, config: Option<RequestConfig>) -> Result<VirtualEvent, GraphError> {
        self.resource
            .send::<(), _, _>(Method::POST, &TOWNHALLS_CREATE, None, Some(body), config)
            .await
    }

    /// `/solutions/virtualEvents/townhalls/{virtualEventTownhall-id}`
    pub fn townhall(&self, townhall_id: impl Into<String>) -> TownhallClient {
        TownhallClient {
            resource: self.resource.child(TOWNHALL_ID, townhall_id),
        }
    }
}

/// Client for one town hall.
#[derive(Debug, Clone)]
pub struct TownhallClient {
    resource: ResourceClient,
}

impl TownhallClient {
    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET .../townhalls/{id}`
    pub async fn get(&self, params: Option<&GetQuery>, config: Option<RequestConfig>) -> Result<VirtualEvent, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &TOWNHALL, params, None, config)
            .await
    }

    /// `PATCH .../townhalls/{id}`
    pub async fn update(&self, body: &VirtualEvent, config: Option<RequestConfig>) -> Result<(), GraphError> {
        self.resource
            .send::<(), _, _>(Method::PATCH, &TOWNHALL_WRITE, None, Some(body), config)
            .await
    }

    /// `DELETE .../townhalls/{id}`
    pub async fn delete(&self, config: Option<RequestConfig>) -> Result<(), GraphError> {
        self.resource
            .send::<(), (), _>(Method::DELETE, &TOWNHALL_WRITE, None, None, config)
            .await
    }
}
