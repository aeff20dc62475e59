//! Service contract consumed by the core.
//!
//! `LabApi` is the transport seam: session, loader, and onboarding logic
//! depend on the trait, never on the concrete HTTP client, so all flows
//! are testable without a running service.

pub mod error;
pub mod rest;
pub mod types;

pub use error::ApiError;
pub use rest::RestClient;
pub use types::{OnboardingSnapshot, RegisterRequest, RegisterResponse, TokenPair};

use crate::models::{OnboardingDocument, PatientProfile};

/// Abstract lab-report service. All calls are synchronous from the
/// caller's point of view; the shell keys per-operation progress
/// indicators to individual invocations.
pub trait LabApi {
    /// Exchange credentials for a token pair.
    fn login(&self, username: &str, password: &str) -> Result<TokenPair, ApiError>;

    /// Create an account; tokens are returned when the service
    /// auto-authenticates it.
    fn register(&self, payload: &RegisterRequest) -> Result<RegisterResponse, ApiError>;

    /// Fetch the authoritative patient profile. Requires a valid credential.
    fn fetch_profile(&self) -> Result<PatientProfile, ApiError>;

    /// Fetch the current (possibly partial) onboarding state.
    fn fetch_onboarding(&self) -> Result<OnboardingSnapshot, ApiError>;

    /// Save the full onboarding document. Full-replace semantics,
    /// never a patch. Returns the stored document.
    fn save_onboarding(
        &self,
        document: &OnboardingDocument,
    ) -> Result<OnboardingDocument, ApiError>;
}

#[cfg(test)]
pub(crate) mod mock {
    //! Configurable in-memory service for flow tests.

    use std::sync::Mutex;

    use super::*;

    type Hook = Box<dyn Fn() + Send>;

    /// Scripted `LabApi` implementation. Results default to success;
    /// set the corresponding field to script a failure. `on_fetch_profile`
    /// runs mid-call, which lets tests interleave a logout with a
    /// pending fetch.
    pub struct MockApi {
        pub profile: Mutex<Result<PatientProfile, ApiError>>,
        pub snapshot: Mutex<OnboardingSnapshot>,
        pub save_error: Mutex<Option<ApiError>>,
        pub saved: Mutex<Vec<OnboardingDocument>>,
        pub on_fetch_profile: Mutex<Option<Hook>>,
    }

    impl Default for MockApi {
        fn default() -> Self {
            Self {
                profile: Mutex::new(Ok(PatientProfile::default())),
                snapshot: Mutex::new(OnboardingSnapshot::default()),
                save_error: Mutex::new(None),
                saved: Mutex::new(Vec::new()),
                on_fetch_profile: Mutex::new(None),
            }
        }
    }

    impl MockApi {
        pub fn with_profile(profile: PatientProfile) -> Self {
            let api = Self::default();
            *api.profile.lock().unwrap() = Ok(profile);
            api
        }

        pub fn failing_fetch(error: ApiError) -> Self {
            let api = Self::default();
            *api.profile.lock().unwrap() = Err(error);
            api
        }
    }

    impl LabApi for MockApi {
        fn login(&self, _username: &str, _password: &str) -> Result<TokenPair, ApiError> {
            Ok(TokenPair {
                access: "test-access-token".into(),
                refresh: Some("test-refresh-token".into()),
            })
        }

        fn register(&self, _payload: &RegisterRequest) -> Result<RegisterResponse, ApiError> {
            Ok(RegisterResponse {
                tokens: Some(TokenPair {
                    access: "test-access-token".into(),
                    refresh: None,
                }),
            })
        }

        fn fetch_profile(&self) -> Result<PatientProfile, ApiError> {
            if let Some(hook) = self.on_fetch_profile.lock().unwrap().as_ref() {
                hook();
            }
            self.profile.lock().unwrap().clone()
        }

        fn fetch_onboarding(&self) -> Result<OnboardingSnapshot, ApiError> {
            Ok(self.snapshot.lock().unwrap().clone())
        }

        fn save_onboarding(
            &self,
            document: &OnboardingDocument,
        ) -> Result<OnboardingDocument, ApiError> {
            if let Some(error) = self.save_error.lock().unwrap().clone() {
                return Err(error);
            }
            self.saved.lock().unwrap().push(document.clone());
            let mut stored = document.clone();
            stored.updated_at = Some(chrono::Utc::now());
            Ok(stored)
        }
    }
}
