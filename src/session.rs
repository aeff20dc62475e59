//! Session store: single owner of the credential and the cached profile.
//!
//! Shared between the shell's transports via `Arc`: one state object
//! behind `RwLock`s. Consumers receive the store by injection; nothing
//! reads ambient globals. The cached profile
//! is written only by the profile loader and by a successful onboarding
//! save — no other writer is permitted.

use std::io;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::config;
use crate::models::PatientProfile;

// ═══════════════════════════════════════════════════════════
// Credential persistence
// ═══════════════════════════════════════════════════════════

/// Durable storage for the single persisted key: the access token.
/// A missing or unreadable file simply means logged out.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Read the persisted token, if any.
    pub fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim().to_string();
                if token.is_empty() {
                    None
                } else {
                    Some(token)
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!("Failed to read stored credential: {e}");
                None
            }
        }
    }

    /// Persist the token, creating parent directories as needed.
    pub fn save(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)
    }

    /// Remove the persisted token. Absent file is not an error.
    pub fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

// ═══════════════════════════════════════════════════════════
// SessionStore
// ═══════════════════════════════════════════════════════════

/// Shared session state: credential + cached patient profile.
///
/// `RwLock` keeps reads concurrent; exactly one credential value is
/// visible to all readers at any instant. Clearing the credential also
/// clears the cached profile — a profile must never outlive the
/// credential it was fetched for.
pub struct SessionStore {
    credential: RwLock<Option<String>>,
    profile: RwLock<Option<PatientProfile>>,
    store: CredentialStore,
}

impl SessionStore {
    /// Open the store backed by the given credential file, restoring
    /// any token persisted by a previous run.
    pub fn open(credential_path: PathBuf) -> Self {
        let store = CredentialStore::new(credential_path);
        let persisted = store.load();
        if persisted.is_some() {
            tracing::debug!("Restored persisted credential");
        }
        Self {
            credential: RwLock::new(persisted),
            profile: RwLock::new(None),
            store,
        }
    }

    /// Open the store at the default application data location.
    pub fn open_default() -> Self {
        Self::open(config::credential_path())
    }

    // ── Credential ──────────────────────────────────────────

    /// Current credential (owned copy).
    pub fn credential(&self) -> Option<String> {
        self.credential
            .read()
            .map(|guard| guard.clone())
            .unwrap_or(None)
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// Set or clear the credential. Persists the change, then updates
    /// in-memory state. Clearing also drops the cached profile.
    pub fn set_credential(&self, token: Option<String>) {
        match &token {
            Some(value) => {
                if let Err(e) = self.store.save(value) {
                    tracing::warn!("Failed to persist credential: {e}");
                }
            }
            None => {
                if let Err(e) = self.store.clear() {
                    tracing::warn!("Failed to remove persisted credential: {e}");
                }
            }
        }

        let clearing = token.is_none();
        if let Ok(mut guard) = self.credential.write() {
            *guard = token;
        }
        if clearing {
            self.set_profile(None);
            tracing::info!("Credential cleared, cached profile dropped");
        }
    }

    // ── Cached profile ──────────────────────────────────────

    /// Cached profile (owned copy).
    pub fn profile(&self) -> Option<PatientProfile> {
        self.profile
            .read()
            .map(|guard| guard.clone())
            .unwrap_or(None)
    }

    /// Replace the cached profile.
    pub fn set_profile(&self, profile: Option<PatientProfile>) {
        if let Ok(mut guard) = self.profile.write() {
            *guard = profile;
        }
    }

    /// Update the cached profile as a function of the previous value.
    /// Supports merging a saved onboarding document into the existing
    /// profile without a service round trip.
    pub fn update_profile<F>(&self, f: F)
    where
        F: FnOnce(Option<PatientProfile>) -> Option<PatientProfile>,
    {
        if let Ok(mut guard) = self.profile.write() {
            let previous = guard.take();
            *guard = f(previous);
        }
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> SessionStore {
        SessionStore::open(dir.path().join("credential"))
    }

    #[test]
    fn fresh_store_is_logged_out() {
        let dir = TempDir::new().unwrap();
        let session = store_in(&dir);
        assert!(!session.is_authenticated());
        assert!(session.credential().is_none());
        assert!(session.profile().is_none());
    }

    #[test]
    fn credential_survives_reopen() {
        let dir = TempDir::new().unwrap();
        store_in(&dir).set_credential(Some("token-abc".into()));

        let reopened = store_in(&dir);
        assert_eq!(reopened.credential().as_deref(), Some("token-abc"));
    }

    #[test]
    fn clearing_credential_removes_persisted_token() {
        let dir = TempDir::new().unwrap();
        let session = store_in(&dir);
        session.set_credential(Some("token-abc".into()));
        session.set_credential(None);

        assert!(store_in(&dir).credential().is_none());
        assert!(!dir.path().join("credential").exists());
    }

    #[test]
    fn clearing_credential_clears_profile() {
        let dir = TempDir::new().unwrap();
        let session = store_in(&dir);
        session.set_credential(Some("token-abc".into()));
        session.set_profile(Some(PatientProfile {
            name: "Ana".into(),
            ..PatientProfile::default()
        }));

        session.set_credential(None);
        assert!(session.profile().is_none());
    }

    #[test]
    fn setting_new_credential_keeps_profile() {
        // Only clearing drops the cache; the loader refetches on change.
        let dir = TempDir::new().unwrap();
        let session = store_in(&dir);
        session.set_credential(Some("token-1".into()));
        session.set_profile(Some(PatientProfile::default()));

        session.set_credential(Some("token-2".into()));
        assert!(session.profile().is_some());
    }

    #[test]
    fn update_profile_sees_previous_value() {
        let dir = TempDir::new().unwrap();
        let session = store_in(&dir);
        session.set_profile(Some(PatientProfile {
            name: "Ana".into(),
            is_onboarding_complete: false,
            ..PatientProfile::default()
        }));

        session.update_profile(|previous| {
            previous.map(|mut p| {
                p.is_onboarding_complete = true;
                p
            })
        });

        let profile = session.profile().unwrap();
        assert_eq!(profile.name, "Ana");
        assert!(profile.is_onboarding_complete);
    }

    #[test]
    fn update_profile_on_empty_cache() {
        let dir = TempDir::new().unwrap();
        let session = store_in(&dir);
        session.update_profile(|previous| {
            assert!(previous.is_none());
            previous
        });
        assert!(session.profile().is_none());
    }

    #[test]
    fn blank_persisted_file_means_logged_out() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("credential"), "  \n").unwrap();
        assert!(store_in(&dir).credential().is_none());
    }

    #[test]
    fn persisted_token_is_trimmed() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("credential"), "token-abc\n").unwrap();
        assert_eq!(store_in(&dir).credential().as_deref(), Some("token-abc"));
    }

    #[test]
    fn concurrent_reads_do_not_block() {
        use std::sync::Arc;
        use std::thread;

        let dir = TempDir::new().unwrap();
        let session = Arc::new(store_in(&dir));
        session.set_credential(Some("token-abc".into()));

        let mut handles = vec![];
        for _ in 0..10 {
            let session = Arc::clone(&session);
            handles.push(thread::spawn(move || {
                assert_eq!(session.credential().as_deref(), Some("token-abc"));
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
    }
}
