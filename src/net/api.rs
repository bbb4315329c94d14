//! REST API client for the auth endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ARCHITECTURE
//! ============
//! These wrappers are stateless and never touch the session store beyond the
//! transport contract: authorized requests read the stored token to attach
//! the bearer header, and a 401 on an authorized endpoint tears the stored
//! session down and sends the browser to `/login`. Persisting a *new*
//! session is the auth context's job, not this layer's. No call is retried;
//! retry policy belongs to whoever shows the error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{Credentials, LoginResponse, RegisterPayload, User};
#[cfg(feature = "hydrate")]
use crate::state::session::SessionStore;

/// Fixed transport deadline for every remote call.
#[cfg(any(test, feature = "hydrate"))]
const REQUEST_TIMEOUT_MS: u32 = 30_000;

#[cfg(any(test, feature = "hydrate"))]
fn login_endpoint() -> &'static str {
    "/auth/login"
}

#[cfg(any(test, feature = "hydrate"))]
fn register_endpoint() -> &'static str {
    "/auth/register"
}

#[cfg(any(test, feature = "hydrate"))]
fn current_user_endpoint() -> &'static str {
    "/auth/me"
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Exchange credentials for a bearer token and user record.
///
/// # Errors
///
/// `Unauthorized` on bad credentials, `Forbidden` for inactive accounts,
/// `Timeout`/`NetworkUnreachable` for transport failures, `Server` on 5xx.
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(login_endpoint())
            .json(credentials)
            .map_err(ApiError::from_fetch)?;
        let resp = send_with_timeout(request).await?;
        if !resp.ok() {
            return Err(error_from_response(&resp).await);
        }
        resp.json::<LoginResponse>().await.map_err(ApiError::from_fetch)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::unavailable())
    }
}

/// Create a new account. The account starts `pending`; this never signs
/// the caller in.
///
/// # Errors
///
/// `Validation` for duplicate username/email or malformed fields (detail is
/// server-reported), `Server` on 5xx, plus the usual transport failures.
pub async fn register(payload: &RegisterPayload) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let request = gloo_net::http::Request::post(register_endpoint())
            .json(payload)
            .map_err(ApiError::from_fetch)?;
        let resp = send_with_timeout(request).await?;
        if !resp.ok() {
            return Err(error_from_response(&resp).await);
        }
        resp.json::<User>().await.map_err(ApiError::from_fetch)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err(ApiError::unavailable())
    }
}

/// Fetch the currently authenticated user from `/auth/me`.
///
/// The stored bearer token is attached automatically. A 401 here means the
/// token is missing, expired, or revoked; the stored session is cleared and
/// the browser is sent to `/login` before the error is returned.
///
/// # Errors
///
/// `Unauthorized` for a dead token, plus the usual transport failures.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut builder = gloo_net::http::Request::get(current_user_endpoint());
        if let Some(token) = SessionStore::new().token() {
            builder = builder.header("Authorization", &bearer_header_value(&token));
        }
        let request = builder.build().map_err(ApiError::from_fetch)?;
        let resp = send_with_timeout(request).await?;
        if resp.status() == 401 {
            handle_global_unauthorized();
            return Err(ApiError::Unauthorized);
        }
        if !resp.ok() {
            return Err(error_from_response(&resp).await);
        }
        resp.json::<User>().await.map_err(ApiError::from_fetch)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::unavailable())
    }
}

/// Race a request against the fixed transport deadline.
#[cfg(feature = "hydrate")]
async fn send_with_timeout(request: gloo_net::http::Request) -> Result<gloo_net::http::Response, ApiError> {
    use futures::future::{Either, select};

    let deadline = gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS);
    match select(Box::pin(request.send()), Box::pin(deadline)).await {
        Either::Left((result, _)) => result.map_err(ApiError::from_fetch),
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

/// Classify a non-OK response, pulling the server's `detail` text if any.
#[cfg(feature = "hydrate")]
async fn error_from_response(resp: &gloo_net::http::Response) -> ApiError {
    let detail = resp
        .text()
        .await
        .ok()
        .and_then(|body| super::error::detail_from_body(&body));
    super::error::error_from_status(resp.status(), detail)
}

/// Transport-owned 401 handling: the stored session is dead, so drop it and
/// force the login view. The in-memory auth context mirrors this on its own
/// when the error reaches it.
#[cfg(feature = "hydrate")]
fn handle_global_unauthorized() {
    SessionStore::new().clear();
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}
