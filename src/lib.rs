//! Labfolio client core.
//!
//! Transport-agnostic state and flow logic for the patient-facing
//! lab-report client: session/credential ownership, profile loading,
//! the navigation gate, and the onboarding questionnaire flow. The
//! shell (rendering, charts, file pickers) sits on top and calls in;
//! nothing here depends on a UI framework.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod onboarding;
pub mod profile_loader;
pub mod routing;
pub mod session;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for the embedding shell. Call once at startup.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} core starting v{}", config::APP_NAME, config::APP_VERSION);
}
