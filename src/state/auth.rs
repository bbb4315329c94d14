//! Auth-session state machine for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and identity-aware components read this state to decide
//! between loading, login redirect, approval notice, and protected content.
//! The transitions here are plain methods over plain data; the signal
//! wiring and persistence around them live in `state::context`.
//!
//! DESIGN
//! ======
//! A session restored from storage is *trusted but unverified*: `user` is
//! populated from the cached record while `verified` stays false until the
//! server confirms it. Keeping the two apart lets callers (and tests) tell
//! an optimistic session from a server-confirmed one.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{User, UserUpdate};

/// Authentication state tracking the current user, the hydration window,
/// and whether the server has confirmed the session.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    /// The authenticated user, or `None` when anonymous.
    pub user: Option<User>,
    /// True only during the startup hydration window and while a
    /// login/register call is in flight. The route guard blocks on this.
    pub loading: bool,
    /// True once the current `user` came from the server in this process
    /// lifetime (login, refresh, or verified hydration) rather than from
    /// the cached record.
    pub verified: bool,
}

impl Default for AuthState {
    /// Freshly constructed state is hydrating: nothing is known yet and the
    /// route guard must wait.
    fn default() -> Self {
        Self { user: None, loading: true, verified: false }
    }
}

impl AuthState {
    /// Settled anonymous state.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { user: None, loading: false, verified: false }
    }

    /// Whether a user is present, cached or verified.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Optimistically restore a cached session. Ends the hydration window
    /// immediately so the UI renders without waiting on the network; the
    /// session stays unverified until the server answers.
    pub(crate) fn restore_cached(&mut self, user: User) {
        self.user = Some(user);
        self.verified = false;
        self.loading = false;
    }

    /// Settle as anonymous (no cached session, or explicit teardown).
    pub(crate) fn settle_anonymous(&mut self) {
        *self = Self::anonymous();
    }

    /// Adopt a server-confirmed user record (login, refresh, or a
    /// successful hydration verification).
    pub(crate) fn confirm(&mut self, user: User) {
        self.user = Some(user);
        self.verified = true;
        self.loading = false;
    }

    /// Shallow-merge a profile patch into the current user. Returns the
    /// merged record, or `None` when anonymous (no-op).
    pub(crate) fn merge_profile(&mut self, update: &UserUpdate) -> Option<User> {
        let user = self.user.as_mut()?;
        user.apply_update(update);
        Some(user.clone())
    }
}
