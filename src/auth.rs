//! Sign-in / sign-up / sign-out orchestration.
//!
//! Thin glue between the service contract and the session store: a
//! credential change always triggers exactly one profile fetch attempt,
//! and nothing is persisted when authentication fails.

use crate::api::{ApiError, LabApi, RegisterRequest};
use crate::profile_loader::ProfileLoader;
use crate::session::SessionStore;

/// Exchange credentials for a token, store it, and load the profile.
pub fn sign_in(
    api: &dyn LabApi,
    session: &SessionStore,
    loader: &ProfileLoader,
    username: &str,
    password: &str,
) -> Result<(), ApiError> {
    let tokens = api.login(username, password)?;
    session.set_credential(Some(tokens.access));
    loader.refresh(api, session);
    tracing::info!("Signed in");
    Ok(())
}

/// Create an account. When the service auto-authenticates it, the
/// returned token is stored and the profile loaded; otherwise the
/// caller routes the user to sign-in.
pub fn sign_up(
    api: &dyn LabApi,
    session: &SessionStore,
    loader: &ProfileLoader,
    payload: &RegisterRequest,
) -> Result<(), ApiError> {
    let response = api.register(payload)?;
    if let Some(tokens) = response.tokens {
        session.set_credential(Some(tokens.access));
        loader.refresh(api, session);
    }
    tracing::info!("Account registered");
    Ok(())
}

/// Clear the credential; the session store drops the cached profile and
/// the persisted token with it.
pub fn sign_out(session: &SessionStore) {
    session.set_credential(None);
    tracing::info!("Signed out");
}
