//! Route-gating decisions shared by guarded routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route must apply identical gating: wait for hydration,
//! send anonymous visitors to login, hold unapproved accounts at a notice,
//! and keep wrong-role users out. The decision is a pure function of auth
//! state so the table is testable without a router.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{AccountStatus, Role};
use crate::state::auth::AuthState;

/// What a guarded route should do for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Hydration (or a login) is still in flight; render a loading
    /// indicator and make no navigation decision yet.
    Loading,
    /// Not authenticated, or authenticated with the wrong role; leave for
    /// the login view.
    RedirectToLogin,
    /// Authenticated but the account is not approved; render the notice in
    /// place, keeping the user on the same URL.
    PendingApproval,
    /// Render the protected content.
    Allow,
}

/// Evaluate the gating table in order; first match wins.
#[must_use]
pub fn route_decision(state: &AuthState, allowed: &[Role]) -> RouteDecision {
    if state.loading {
        return RouteDecision::Loading;
    }
    let Some(user) = &state.user else {
        return RouteDecision::RedirectToLogin;
    };
    if user.status != AccountStatus::Approved {
        return RouteDecision::PendingApproval;
    }
    if !allowed.contains(&user.role) {
        // Wrong-role users go back to login rather than a forbidden page.
        return RouteDecision::RedirectToLogin;
    }
    RouteDecision::Allow
}

/// Login URL carrying the originally requested location, so a successful
/// login can return there.
#[must_use]
pub fn login_redirect_target(from: &str) -> String {
    if from.is_empty() || from == "/" || from.starts_with("/login") {
        return "/login".to_owned();
    }
    format!("/login?from={}", encode_path_component(from))
}

/// Destination after a successful login: the sanitized `from` target when
/// present, otherwise the role home.
#[must_use]
pub fn post_login_destination(from: Option<&str>, role: Role) -> String {
    match from {
        Some(path) if is_safe_redirect(path) => path.to_owned(),
        _ => role.home_path().to_owned(),
    }
}

/// Where `/` should land for the current state. `None` while hydration is
/// still pending.
#[must_use]
pub fn home_destination(state: &AuthState) -> Option<String> {
    if state.loading {
        return None;
    }
    match &state.user {
        Some(user) => Some(user.role.home_path().to_owned()),
        None => Some("/login".to_owned()),
    }
}

/// Only same-origin absolute paths are acceptable redirect targets; reject
/// protocol-relative (`//host`) and external URLs outright.
fn is_safe_redirect(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//")
}

/// Percent-encode the characters that would terminate or corrupt a query
/// value. Paths are otherwise passed through untouched.
fn encode_path_component(path: &str) -> String {
    let mut encoded = String::with_capacity(path.len());
    for ch in path.chars() {
        match ch {
            '%' => encoded.push_str("%25"),
            '?' => encoded.push_str("%3F"),
            '&' => encoded.push_str("%26"),
            '#' => encoded.push_str("%23"),
            ' ' => encoded.push_str("%20"),
            _ => encoded.push(ch),
        }
    }
    encoded
}
