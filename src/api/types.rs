use serde::{Deserialize, Serialize};

use crate::models::{BasicProfile, Lifestyle, MedicalBackground, Sex};

/// Access/refresh token pair issued on login or registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Registration payload. Patient fields are optional — the service
/// fills sensible defaults for a bare account.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patient_sex: Option<Sex>,
}

/// Registration response: tokens are present when the service
/// auto-authenticates the new account.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub tokens: Option<TokenPair>,
}

/// Current onboarding state as returned by the service. A first-time
/// user gets partial or entirely empty data; every section is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OnboardingSnapshot {
    #[serde(default)]
    pub profile: Option<BasicProfile>,
    #[serde(default)]
    pub medical_background: Option<MedicalBackground>,
    #[serde(default)]
    pub lifestyle: Option<Lifestyle>,
}
