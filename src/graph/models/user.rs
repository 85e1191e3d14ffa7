//! User model.

use serde::{Deserialize, Serialize};

use super::AdditionalProperties;

/// A Microsoft Entra user (`/me`, `/users/{id}`).
///
/// Also used as the PATCH body for updates; unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Object id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Given name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,

    /// Surname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,

    /// Primary SMTP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail: Option<String>,

    /// Sign-in name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_principal_name: Option<String>,

    /// Job title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,

    /// Office location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_location: Option<String>,

    /// Preferred language (e.g. `en-US`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,

    /// Mobile phone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,

    /// Business phones.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub business_phones: Vec<String>,

    /// Properties not modelled above.
    #[serde(flatten)]
    pub additional: AdditionalProperties,
}

impl User {
    /// Returns the display name or the principal name.
    pub fn display(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.user_principal_name.as_deref())
            .unwrap_or("Unknown")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_deserialize_keeps_unknown_fields() {
        let user: User = serde_json::from_value(json!({
            "id": "87d349ed-44d7-43e1-9a83-5f2406dee5bd",
            "displayName": "Adele Vance",
            "businessPhones": ["+1 425 555 0109"],
            "employeeId": "1234"
        }))
        .unwrap();
        assert_eq!(user.display(), "Adele Vance");
        assert_eq!(user.business_phones.len(), 1);
        assert_eq!(user.additional["employeeId"], "1234");
    }

    #[test]
    fn test_update_body_omits_unset_fields() {
        let patch = User {
            job_title: Some("Engineer".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(patch).unwrap(), json!({"jobTitle": "Engineer"}));
    }
}
