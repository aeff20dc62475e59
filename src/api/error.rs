//! Service error taxonomy.
//!
//! Nothing here is fatal to the client: `Unauthorized` is treated as
//! logout-equivalent by the profile loader, `Validation` is surfaced
//! inline with state preserved, everything else is retryable.

/// Errors from service calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Authentication required or session expired")]
    Unauthorized,
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Service error ({status}): {detail}")]
    Service { status: u16, detail: String },
    #[error("Malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Map an HTTP error status + body to the taxonomy.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 | 403 => Self::Unauthorized,
            400 => Self::Validation(extract_detail(body)),
            _ => Self::Service {
                status,
                detail: extract_detail(body),
            },
        }
    }
}

/// Pull a human-readable message out of a service error body.
///
/// The service responds with `{"detail": "..."}` for most errors and
/// `{"field": ["msg", ...]}` for field-level validation failures.
fn extract_detail(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return fallback_detail(body);
    };
    if let Some(detail) = value.get("detail").and_then(|v| v.as_str()) {
        return detail.to_string();
    }
    // First field error, joined if the value is a message list.
    if let Some(obj) = value.as_object() {
        for (field, messages) in obj {
            match messages {
                serde_json::Value::String(s) => return format!("{field}: {s}"),
                serde_json::Value::Array(items) => {
                    let joined: Vec<&str> =
                        items.iter().filter_map(|m| m.as_str()).collect();
                    if !joined.is_empty() {
                        return format!("{field}: {}", joined.join(", "));
                    }
                }
                _ => {}
            }
        }
    }
    fallback_detail(body)
}

fn fallback_detail(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_statuses() {
        assert_eq!(ApiError::from_status(401, ""), ApiError::Unauthorized);
        assert_eq!(ApiError::from_status(403, ""), ApiError::Unauthorized);
    }

    #[test]
    fn bad_request_maps_to_validation_with_detail() {
        let err = ApiError::from_status(400, r#"{"detail": "Debe estar entre 1 y 5"}"#);
        assert_eq!(err, ApiError::Validation("Debe estar entre 1 y 5".into()));
    }

    #[test]
    fn field_errors_use_first_field() {
        let err = ApiError::from_status(400, r#"{"stress_level": ["out of range"]}"#);
        assert_eq!(err, ApiError::Validation("stress_level: out of range".into()));
    }

    #[test]
    fn server_errors_carry_status() {
        let err = ApiError::from_status(502, "bad gateway");
        assert_eq!(
            err,
            ApiError::Service {
                status: 502,
                detail: "bad gateway".into()
            }
        );
    }

    #[test]
    fn empty_body_gets_fallback_message() {
        match ApiError::from_status(500, "") {
            ApiError::Service { detail, .. } => assert_eq!(detail, "Request failed"),
            other => panic!("Expected Service, got: {other}"),
        }
    }
}
