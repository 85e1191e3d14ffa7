//! Teamwork clients (`/me/teamwork`).

use reqwest::Method;

use super::models::{ActivityNotification, Collection, InstallApp, TeamsAppInstallation, UserTeamwork};
use super::query::{GetQuery, ODataQuery, GET_PARAMS, LIST_PARAMS, NO_PARAMS};
use super::resource::{ActionClient, Endpoint, ResourceClient};
use crate::error::GraphError;
use crate::http::{HttpClient, RequestConfig};
use crate::url_template::ParamDescriptor;

const INSTALLATION_ID: &str = "userScopeTeamsAppInstallation-id";
const INSTALLATION_PATH: &[ParamDescriptor] = &[ParamDescriptor::path(INSTALLATION_ID)];

const TEAMWORK: Endpoint = Endpoint::new("/me/teamwork", NO_PARAMS, GET_PARAMS);
const SEND_ACTIVITY_NOTIFICATION: Endpoint =
    Endpoint::new("/me/teamwork/sendActivityNotification", NO_PARAMS, NO_PARAMS);
const INSTALLED_APPS: Endpoint = Endpoint::new("/me/teamwork/installedApps", NO_PARAMS, LIST_PARAMS);
const INSTALLED_APPS_CREATE: Endpoint = Endpoint::new("/me/teamwork/installedApps", NO_PARAMS, NO_PARAMS);
const INSTALLED_APP: Endpoint = Endpoint::new(
    "/me/teamwork/installedApps/{userScopeTeamsAppInstallation-id}",
    INSTALLATION_PATH,
    GET_PARAMS,
);
const INSTALLED_APP_DELETE: Endpoint = Endpoint::new(
    "/me/teamwork/installedApps/{userScopeTeamsAppInstallation-id}",
    INSTALLATION_PATH,
    NO_PARAMS,
);

/// Client for `/me/teamwork`.
#[derive(Debug, Clone)]
pub struct TeamworkClient {
    resource: ResourceClient,
}

impl TeamworkClient {
    pub(crate) fn from_resource(resource: ResourceClient) -> Self {
        Self { resource }
    }

    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET /me/teamwork`
    pub async fn get(
        &self,
        params: Option<&GetQuery>,
        config: Option<RequestConfig>,
    ) -> Result<UserTeamwork, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &TEAMWORK, params, None, config)
            .await
    }

    /// `/me/teamwork/installedApps`
    pub fn installed_apps(&self) -> InstalledAppsClient {
        InstalledAppsClient {
            resource: self.resource.clone(),
        }
    }

    /// `/me/teamwork/installedApps/{userScopeTeamsAppInstallation-id}`
    pub fn installed_app(&self, installation_id: impl Into<String>) -> InstalledAppClient {
        InstalledAppClient {
            resource: self.resource.child(INSTALLATION_ID, installation_id),
        }
    }

    /// `/me/teamwork/sendActivityNotification`
    pub fn send_activity_notification(&self) -> ActionClient<ActivityNotification> {
        ActionClient::new(self.resource.clone(), &SEND_ACTIVITY_NOTIFICATION)
    }
}

/// Client for `/me/teamwork/installedApps`.
#[derive(Debug, Clone)]
pub struct InstalledAppsClient {
    resource: ResourceClient,
}

impl InstalledAppsClient {
    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET /me/teamwork/installedApps`. Use `$expand=teamsApp` for app names.
    pub async fn list(
        &self,
        params: Option<&ODataQuery>,
        config: Option<RequestConfig>,
    ) -> Result<Collection<TeamsAppInstallation>, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &INSTALLED_APPS, params, None, config)
            .await
    }

    /// `POST /me/teamwork/installedApps`. Graph answers `201` with no body.
    pub async fn create(&self, body: &InstallApp, config: Option<RequestConfig>) -> Result<(), GraphError> {
        self.resource
            .send::<(), _, _>(Method::POST, &INSTALLED_APPS_CREATE, None, Some(body), config)
            .await
    }
}

/// Client for one installed app.
#[derive(Debug, Clone)]
pub struct InstalledAppClient {
    resource: ResourceClient,
}

impl InstalledAppClient {
    /// The shared HTTP client.
    pub fn http(&self) -> &HttpClient {
        self.resource.http()
    }

    /// `GET /me/teamwork/installedApps/{id}`
    pub async fn get(
        &self,
        params: Option<&GetQuery>,
        config: Option<RequestConfig>,
    ) -> Result<TeamsAppInstallation, GraphError> {
        self.resource
            .send::<_, (), _>(Method::GET, &INSTALLED_APP, params, None, config)
            .await
    }

    /// `DELETE /me/teamwork/installedApps/{id}`, uninstalls the app.
    pub async fn delete(&self, config: Option<RequestConfig>) -> Result<(), GraphError> {
        self.resource
            .send::<(), (), _>(Method::DELETE, &INSTALLED_APP_DELETE, None, None, config)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teamwork() -> TeamworkClient {
        TeamworkClient::from_resource(ResourceClient::new(HttpClient::graph_default().unwrap()))
    }

    #[test]
    fn test_installed_app_url() {
        let app = teamwork().installed_app("NjRi");
        let query = GetQuery::new().add_expand(["teamsApp"]);
        let resolved = app.resource.resolve(&INSTALLED_APP, Some(&query)).unwrap();
        assert_eq!(resolved.url, "/me/teamwork/installedApps/NjRi?$expand=teamsApp");
    }

    #[test]
    fn test_send_activity_notification_path() {
        assert_eq!(
            teamwork().send_activity_notification().path().unwrap(),
            "/me/teamwork/sendActivityNotification"
        );
    }

    #[test]
    fn test_installed_apps_share_client() {
        let teamwork = teamwork();
        assert!(teamwork.installed_apps().http().same_as(teamwork.http()));
        assert!(teamwork.installed_app("x").http().same_as(teamwork.http()));
    }
}
