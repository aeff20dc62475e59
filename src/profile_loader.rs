//! Profile loader: reconciles the cached profile with the service.
//!
//! Called on every credential change and on demand after flows that can
//! change the server-side profile (onboarding save, report upload).
//! Failures never propagate into the navigation path — they degrade the
//! cache to "profile unknown" and are recorded for the shell to display.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::RwLock;

use crate::api::{ApiError, LabApi};
use crate::session::SessionStore;

/// Fetches the authoritative profile and writes it into the session.
///
/// Later refreshes win over earlier ones: each call takes a generation
/// number and a result is committed only if no newer refresh has started
/// and the credential it was fetched for is still current. A logout
/// racing a pending fetch therefore cannot resurrect the cleared
/// profile.
pub struct ProfileLoader {
    generation: AtomicU64,
    loading: AtomicBool,
    last_error: RwLock<Option<ApiError>>,
}

impl ProfileLoader {
    pub fn new() -> Self {
        Self {
            generation: AtomicU64::new(0),
            loading: AtomicBool::new(false),
            last_error: RwLock::new(None),
        }
    }

    /// Fetch the profile for the current credential and store it.
    ///
    /// No credential → cache cleared and nothing fetched. Unauthorized →
    /// logout-equivalent: the credential itself is cleared. Any other
    /// failure → cache cleared, error recorded, retryable via the next
    /// `refresh`.
    pub fn refresh(&self, api: &dyn LabApi, session: &SessionStore) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let Some(credential) = session.credential() else {
            session.set_profile(None);
            self.record_error(None);
            return;
        };

        self.loading.store(true, Ordering::SeqCst);
        let result = api.fetch_profile();
        self.loading.store(false, Ordering::SeqCst);

        // Stale-result suppression: drop the result if a newer refresh
        // started or the credential changed while this one was in flight.
        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("Dropping superseded profile fetch result");
            return;
        }
        if session.credential().as_deref() != Some(credential.as_str()) {
            tracing::debug!("Dropping profile fetch result for a stale credential");
            return;
        }

        match result {
            Ok(profile) => {
                self.record_error(None);
                session.set_profile(Some(profile));
                tracing::debug!("Profile refreshed");
            }
            Err(ApiError::Unauthorized) => {
                tracing::warn!("Credential rejected by service, signing out");
                self.record_error(Some(ApiError::Unauthorized));
                session.set_credential(None);
            }
            Err(e) => {
                tracing::warn!("Failed to load patient profile: {e}");
                self.record_error(Some(e));
                session.set_profile(None);
            }
        }
    }

    /// Whether a fetch is currently in flight.
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// The failure recorded by the most recent fetch, if any.
    pub fn last_error(&self) -> Option<ApiError> {
        self.last_error
            .read()
            .map(|guard| guard.clone())
            .unwrap_or(None)
    }

    fn record_error(&self, error: Option<ApiError>) {
        if let Ok(mut guard) = self.last_error.write() {
            *guard = error;
        }
    }
}

impl Default for ProfileLoader {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
