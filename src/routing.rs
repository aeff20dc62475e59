//! Navigation gate.
//!
//! `decide` is the single authorization cascade for every navigation:
//! 1. Login/registration → always allowed
//! 2. No credential → redirect to login
//! 3. Profile known and onboarding incomplete → redirect to onboarding
//! 4. Default → allow
//!
//! Checked in order, re-evaluated on every navigation (never cached):
//! the profile can change asynchronously — right after onboarding
//! completes, for example — and the gate must reflect the latest state
//! without a reload. "Profile unknown" (credential present, fetch still
//! pending) is distinct from "profile incomplete": the shell renders a
//! loading state instead of bouncing between routes.

use crate::models::PatientProfile;

// ═══════════════════════════════════════════════════════════
// Routes
// ═══════════════════════════════════════════════════════════

/// Named destinations exposed by the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Register,
    Onboarding,
    Home,
    Upload,
    ReportDetail(i64),
    Profile,
}

impl Route {
    /// Parse a path into a route. `None` for unmatched paths, which the
    /// shell resolves through `fallback`.
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" => Some(Self::Home),
            "/login" => Some(Self::Login),
            "/register" => Some(Self::Register),
            "/onboarding" => Some(Self::Onboarding),
            "/upload" => Some(Self::Upload),
            "/profile" => Some(Self::Profile),
            _ => {
                let id = trimmed.strip_prefix("/reports/")?;
                id.parse().ok().map(Self::ReportDetail)
            }
        }
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Login => "/login".into(),
            Self::Register => "/register".into(),
            Self::Onboarding => "/onboarding".into(),
            Self::Home => "/".into(),
            Self::Upload => "/upload".into(),
            Self::ReportDetail(id) => format!("/reports/{id}"),
            Self::Profile => "/profile".into(),
        }
    }
}

/// Outcome of a navigation check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Redirect(Route),
}

// ═══════════════════════════════════════════════════════════
// Decision
// ═══════════════════════════════════════════════════════════

/// Decide whether the requested route may be reached.
///
/// Pure: no navigation side effects, independently testable. `profile`
/// is `None` while the fetch is pending — never a reason to redirect.
pub fn decide(
    credential: Option<&str>,
    profile: Option<&PatientProfile>,
    route: &Route,
) -> Decision {
    // Rule 1: authentication surfaces are always reachable
    if matches!(route, Route::Login | Route::Register) {
        return Decision::Allow;
    }

    // Rule 2: no credential
    if credential.is_none() {
        return Decision::Redirect(Route::Login);
    }

    // Rule 3: onboarding incomplete (only once the profile is known)
    if let Some(profile) = profile {
        if !profile.is_onboarding_complete && *route != Route::Onboarding {
            return Decision::Redirect(Route::Onboarding);
        }
    }

    // Rule 4: default allow
    Decision::Allow
}

/// Resolve an unmatched path: the same cascade applied to the main area.
pub fn fallback(credential: Option<&str>, profile: Option<&PatientProfile>) -> Route {
    match decide(credential, profile, &Route::Home) {
        Decision::Allow => Route::Home,
        Decision::Redirect(route) => route,
    }
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
