//! Teamwork models: installed apps and activity feed notifications.

use serde::{Deserialize, Serialize};

use super::{AdditionalProperties, ItemBody};

/// The teamwork settings of a user (`/me/teamwork`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserTeamwork {
    /// Id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Region of the user's organization, e.g. `emea`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Locale, e.g. `en-us`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional: AdditionalProperties,
}

/// A Teams app from the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsApp {
    /// Catalog id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Id from the app manifest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// App name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// `store`, `organization` or `sideloaded`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution_method: Option<String>,
}

/// An app installed in a user's personal scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamsAppInstallation {
    /// Installation id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The app, present with `$expand=teamsApp`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teams_app: Option<TeamsApp>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional: AdditionalProperties,
}

/// Body for installing an app for a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallApp {
    /// Bind link to the catalog app.
    #[serde(rename = "teamsApp@odata.bind")]
    pub teams_app_bind: String,
}

impl InstallApp {
    /// Binds the catalog app with the given id.
    pub fn for_app(app_id: &str) -> Self {
        Self {
            teams_app_bind: format!("https://graph.microsoft.com/v1.0/appCatalogs/teamsApps/{app_id}"),
        }
    }
}

/// Topic of an activity feed notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityTopic {
    /// `entityUrl` or `text`.
    pub source: String,

    /// Entity URL or topic text.
    pub value: String,

    /// Deep link, required when `source` is `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
}

impl ActivityTopic {
    /// Topic pointing at a Graph entity.
    pub fn entity_url(url: impl Into<String>) -> Self {
        Self {
            source: "entityUrl".to_string(),
            value: url.into(),
            web_url: None,
        }
    }

    /// Free text topic with a deep link.
    pub fn text(value: impl Into<String>, web_url: impl Into<String>) -> Self {
        Self {
            source: "text".to_string(),
            value: value.into(),
            web_url: Some(web_url.into()),
        }
    }
}

/// A name/value pair for template parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValuePair {
    /// Name.
    pub name: String,
    /// Value.
    pub value: String,
}

/// Body of `sendActivityNotification`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityNotification {
    /// What the notification is about.
    pub topic: ActivityTopic,

    /// Activity type declared in the app manifest.
    pub activity_type: String,

    /// Numeric id shown in the feed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<i64>,

    /// Preview text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_text: Option<ItemBody>,

    /// Values for the manifest's template parameters.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub template_parameters: Vec<KeyValuePair>,
}

impl ActivityNotification {
    /// Creates a notification.
    pub fn new(topic: ActivityTopic, activity_type: impl Into<String>) -> Self {
        Self {
            topic,
            activity_type: activity_type.into(),
            ..Default::default()
        }
    }

    /// Sets the preview text.
    pub fn with_preview_text(mut self, text: impl Into<String>) -> Self {
        self.preview_text = Some(ItemBody::text(text));
        self
    }

    /// Adds one template parameter.
    pub fn with_template_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.template_parameters.push(KeyValuePair {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_install_app_bind() {
        assert_eq!(
            serde_json::to_value(InstallApp::for_app("12345678-9abc")).unwrap(),
            json!({"teamsApp@odata.bind": "https://graph.microsoft.com/v1.0/appCatalogs/teamsApps/12345678-9abc"})
        );
    }

    #[test]
    fn test_activity_notification_body() {
        let notification = ActivityNotification::new(
            ActivityTopic::text("Deployment", "https://teams.microsoft.com/l/entity/app/tab"),
            "deploymentApprovalRequired",
        )
        .with_preview_text("Approve release 1.2")
        .with_template_parameter("deploymentId", "6788662");

        let json = serde_json::to_value(notification).unwrap();
        assert_eq!(json["topic"]["source"], "text");
        assert_eq!(json["topic"]["webUrl"], "https://teams.microsoft.com/l/entity/app/tab");
        assert_eq!(json["activityType"], "deploymentApprovalRequired");
        assert_eq!(json["previewText"]["content"], "Approve release 1.2");
        assert_eq!(json["templateParameters"][0]["name"], "deploymentId");
        assert!(json.get("chainId").is_none());
    }

    #[test]
    fn test_installation_with_expanded_app() {
        let installation: TeamsAppInstallation = serde_json::from_value(json!({
            "id": "NjRiOWM3NDYtYjE1NS00MDQyLThmNzctOWY5ZjY1MmI5NjgwIyMw",
            "teamsApp": {"id": "app-1", "displayName": "Polly", "distributionMethod": "store"}
        }))
        .unwrap();
        let app = installation.teams_app.unwrap();
        assert_eq!(app.display_name.as_deref(), Some("Polly"));
    }
}
