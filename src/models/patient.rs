use serde::{Deserialize, Serialize};

use super::onboarding::OnboardingDocument;

/// Account identity nested inside the patient profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Server-authoritative record of the current user.
///
/// Lifetime is derived from the credential: fetched fresh whenever one
/// appears, cleared when it goes away. Only the profile loader and a
/// successful onboarding save may write the cached copy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatientProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub user: Option<UserInfo>,
    #[serde(default)]
    pub is_onboarding_complete: bool,
    #[serde(default)]
    pub onboarding: Option<OnboardingDocument>,
}

impl PatientProfile {
    /// Display name: patient record name, falling back to the account username.
    pub fn display_name(&self) -> &str {
        let trimmed = self.name.trim();
        if !trimmed.is_empty() {
            return trimmed;
        }
        self.user
            .as_ref()
            .map(|u| u.username.as_str())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_service_profile() {
        let json = r#"{
            "id": 7,
            "name": "Ana Torres",
            "user": {"id": 3, "username": "ana", "email": "ana@example.com"},
            "is_onboarding_complete": false,
            "onboarding": null
        }"#;
        let profile: PatientProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, Some(7));
        assert!(!profile.is_onboarding_complete);
        assert!(profile.onboarding.is_none());
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let profile = PatientProfile {
            name: "  ".into(),
            user: Some(UserInfo {
                username: "ana".into(),
                ..UserInfo::default()
            }),
            ..PatientProfile::default()
        };
        assert_eq!(profile.display_name(), "ana");
    }

    #[test]
    fn display_name_prefers_patient_name() {
        let profile = PatientProfile {
            name: "Ana Torres".into(),
            ..PatientProfile::default()
        };
        assert_eq!(profile.display_name(), "Ana Torres");
    }
}
