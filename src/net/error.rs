//! Failure taxonomy for remote auth calls.
//!
//! ERROR HANDLING
//! ==============
//! Every transport failure is folded into [`ApiError`] before it leaves the
//! `net` layer, so callers branch on a closed set of kinds instead of raw
//! status codes or fetch exception strings. The UI-facing message/recovery
//! mapping lives in `util::errors`; this module only names the failure.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Classified failure from a remote call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Bad credentials, or a missing/expired/invalid bearer token.
    #[error("unauthorized")]
    Unauthorized,
    /// Authenticated but not allowed (account not approved, role mismatch).
    #[error("forbidden")]
    Forbidden,
    /// The requested resource does not exist.
    #[error("not found")]
    NotFound,
    /// The 30-second request deadline elapsed.
    #[error("request timed out")]
    Timeout,
    /// The fetch itself failed before a response arrived.
    #[error("network unreachable")]
    NetworkUnreachable,
    /// A 5xx response; the status is kept for logging.
    #[error("server error (status {0})")]
    Server(u16),
    /// A 4xx with server-reported, field-level detail (duplicate username,
    /// malformed input). The detail text is safe to show verbatim.
    #[error("{0}")]
    Validation(String),
    /// Anything that resisted classification; message kept for sniffing.
    #[error("{0}")]
    Other(String),
}

impl ApiError {
    /// Stub error returned by `net::api` outside the browser build.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::Other("not available on server".to_owned())
    }

    #[cfg(feature = "hydrate")]
    pub(crate) fn from_fetch(err: gloo_net::Error) -> Self {
        classify_fetch_message(&err.to_string())
    }
}

/// Map an HTTP error status (plus optional server detail) to an [`ApiError`].
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn error_from_status(status: u16, detail: Option<String>) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        404 => ApiError::NotFound,
        408 => ApiError::Timeout,
        400 | 409 | 422 => {
            ApiError::Validation(detail.unwrap_or_else(|| "The submitted data was rejected.".to_owned()))
        }
        500..=599 => ApiError::Server(status),
        other => ApiError::Other(detail.unwrap_or_else(|| format!("unexpected status {other}"))),
    }
}

/// Extract the `detail` field from a FastAPI-style error body.
///
/// Accepts either a plain string detail or the 422 validation shape, where
/// `detail` is an array of objects carrying a `msg` field.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn detail_from_body(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Array(items) => items
            .iter()
            .find_map(|item| item.get("msg").and_then(serde_json::Value::as_str))
            .map(str::to_owned),
        _ => None,
    }
}

/// Classify an opaque fetch-layer message by its content.
///
/// Browsers report network failures as exception text rather than a status,
/// so the transport sniffs for the well-known markers before giving up.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn classify_fetch_message(message: &str) -> ApiError {
    let lowered = message.to_ascii_lowercase();
    if lowered.contains("failed to fetch") || lowered.contains("networkerror") || lowered.contains("network") {
        ApiError::NetworkUnreachable
    } else if lowered.contains("timed out") || lowered.contains("timeout") {
        ApiError::Timeout
    } else {
        ApiError::Other(message.to_owned())
    }
}
