//! HTTP implementation of the service contract.
//!
//! The bearer token is read from the injected `SessionStore` on every
//! request, so a logout takes effect immediately for all later calls.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::types::{OnboardingSnapshot, RegisterRequest, RegisterResponse, TokenPair};
use super::{ApiError, LabApi};
use crate::config;
use crate::models::{OnboardingDocument, PatientProfile};
use crate::session::SessionStore;

/// Request timeout. Saves and fetches are small JSON bodies.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// REST client for the lab-report service.
pub struct RestClient {
    base_url: String,
    client: reqwest::blocking::Client,
    session: Arc<SessionStore>,
}

impl RestClient {
    /// Create a client against an explicit base URL.
    pub fn new(base_url: &str, session: Arc<SessionStore>) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            session,
        }
    }

    /// Base URL from `LABFOLIO_API_URL`, falling back to the default
    /// local service.
    pub fn from_env(session: Arc<SessionStore>) -> Self {
        let base_url = std::env::var(config::API_URL_ENV)
            .unwrap_or_else(|_| config::DEFAULT_API_URL.to_string());
        Self::new(&base_url, session)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attach the current bearer token, when one is present.
    fn authorize(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        match self.session.credential() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let request = self.authorize(self.client.get(&url));
        Self::execute(request)
    }

    fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        authorized: bool,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let mut request = self.client.post(&url).json(body);
        if authorized {
            request = self.authorize(request);
        }
        Self::execute(request)
    }

    fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{path}", self.base_url);
        let request = self.authorize(self.client.put(&url).json(body));
        Self::execute(request)
    }

    fn execute<T: DeserializeOwned>(
        request: reqwest::blocking::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().map_err(|e| {
            if e.is_connect() {
                ApiError::Network(format!("Cannot reach service: {e}"))
            } else if e.is_timeout() {
                ApiError::Network(format!(
                    "Request timed out after {REQUEST_TIMEOUT_SECS}s"
                ))
            } else {
                ApiError::Network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        response
            .json()
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl LabApi for RestClient {
    fn login(&self, username: &str, password: &str) -> Result<TokenPair, ApiError> {
        let body = serde_json::json!({ "username": username, "password": password });
        self.post_json("/api/auth/login/", &body, false)
    }

    fn register(&self, payload: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
        self.post_json("/api/auth/register/", payload, false)
    }

    fn fetch_profile(&self) -> Result<PatientProfile, ApiError> {
        self.get_json("/api/profile/")
    }

    fn fetch_onboarding(&self) -> Result<OnboardingSnapshot, ApiError> {
        self.get_json("/api/onboarding/")
    }

    fn save_onboarding(
        &self,
        document: &OnboardingDocument,
    ) -> Result<OnboardingDocument, ApiError> {
        self.put_json("/api/onboarding/", document)
    }
}
