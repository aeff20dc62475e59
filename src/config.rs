use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Labfolio";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default base URL of the lab-report service.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable overriding the service base URL.
pub const API_URL_ENV: &str = "LABFOLIO_API_URL";

/// Default tracing filter when RUST_LOG is unset.
pub fn default_log_filter() -> String {
    format!("info,{}=debug", env!("CARGO_PKG_NAME"))
}

/// Get the application data directory
/// ~/Labfolio/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Labfolio")
}

/// Path of the single durable key: the stored access token.
pub fn credential_path() -> PathBuf {
    app_data_dir().join("credential")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_data_dir_under_home() {
        let dir = app_data_dir();
        let home = dirs::home_dir().unwrap();
        assert!(dir.starts_with(home));
        assert!(dir.ends_with("Labfolio"));
    }

    #[test]
    fn credential_path_under_app_data() {
        let path = credential_path();
        assert!(path.starts_with(app_data_dir()));
        assert!(path.ends_with("credential"));
    }

    #[test]
    fn app_name_is_labfolio() {
        assert_eq!(APP_NAME, "Labfolio");
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn default_filter_names_crate() {
        assert!(default_log_filter().contains("labfolio=debug"));
    }
}
