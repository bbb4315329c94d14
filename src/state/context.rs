//! Process-wide auth context: the state machine wired to the session store
//! and the auth API.
//!
//! ARCHITECTURE
//! ============
//! One `AuthContext` is constructed in `App` and provided through Leptos
//! context; there is no ambient global. The context owns what gets
//! persisted when and which failures tear the session down, while
//! `AuthState` holds the pure transitions and `net::api` the transport.
//! Overlapping async calls are not sequenced: the last write to the signal
//! wins, and `loading` is the only synchronization signal callers may rely
//! on.

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, LoginResponse, RegisterPayload, User, UserUpdate};

use super::auth::AuthState;
use super::session::SessionStore;

/// Shared handle to the authentication lifecycle.
#[derive(Clone)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    store: SessionStore,
}

/// Ends the loading window when dropped, so every exit path of a
/// login/register call resets the flag exactly once.
struct LoadingReset(RwSignal<AuthState>);

impl Drop for LoadingReset {
    fn drop(&mut self) {
        self.0.update(|state| state.loading = false);
    }
}

impl AuthContext {
    /// Create the context in its hydrating state. Call [`Self::hydrate`]
    /// once on the client to settle it.
    #[must_use]
    pub fn new(store: SessionStore) -> Self {
        Self {
            state: RwSignal::new(AuthState::default()),
            store,
        }
    }

    /// Reactive auth state, for guards and identity-aware views.
    #[must_use]
    pub fn state(&self) -> RwSignal<AuthState> {
        self.state
    }

    /// Restore the persisted session and, when one exists, verify it
    /// against the server in the background.
    ///
    /// The synchronous phase ends the hydration window immediately: a
    /// cached session renders as authenticated before the network answers
    /// (trust, then verify), and an empty store settles as anonymous.
    pub fn hydrate(&self) {
        let restored = self.restore_from_store();
        if !restored {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let context = self.clone();
            leptos::task::spawn_local(async move {
                let result = api::fetch_current_user().await;
                context.apply_verification_result(result);
            });
        }
    }

    /// Exchange credentials for a session.
    ///
    /// On success the session is persisted and the state becomes
    /// authenticated and verified. On failure any stored session is
    /// cleared, the state settles as anonymous, and the original error is
    /// returned for classification.
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] from the login call.
    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        self.state.update(|state| state.loading = true);
        let _loading = LoadingReset(self.state);
        self.apply_login_result(api::login(credentials).await)
    }

    /// Create a new account. Never authenticates the caller: accounts start
    /// `pending` and an admin has to approve them before login works.
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] from the register call.
    pub async fn register(&self, payload: &RegisterPayload) -> Result<User, ApiError> {
        self.state.update(|state| state.loading = true);
        let _loading = LoadingReset(self.state);
        api::register(payload).await
    }

    /// Drop the session: clear storage, settle anonymous. Synchronous, no
    /// network, idempotent.
    pub fn logout(&self) {
        self.store.clear();
        self.state.update(AuthState::settle_anonymous);
    }

    /// Shallow-merge a profile patch into the current user and persist the
    /// merged record immediately, so the optimistic edit survives a reload
    /// until the next refresh reconciles it. No-op when anonymous.
    pub fn update_user(&self, update: &UserUpdate) {
        let mut merged = None;
        self.state.update(|state| merged = state.merge_profile(update));
        let Some(user) = merged else {
            return;
        };
        if let Some(token) = self.store.token() {
            self.store.save(&token, &user);
        }
    }

    /// Re-fetch the current user and overwrite both the in-memory and the
    /// persisted copy. Unlike the lenient hydration path, *any* failure
    /// here logs the user out; this is the explicit, user-triggered resync.
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] from the fetch; the session is already
    /// torn down when it returns.
    pub async fn refresh_user(&self) -> Result<User, ApiError> {
        self.apply_refresh_result(api::fetch_current_user().await)
    }

    /// Synchronous hydration phase. Returns whether a cached session was
    /// restored and verification should run.
    fn restore_from_store(&self) -> bool {
        match self.store.load() {
            Some(record) => {
                self.state.update(|state| state.restore_cached(record.user));
                true
            }
            None => {
                self.state.update(AuthState::settle_anonymous);
                false
            }
        }
    }

    /// Outcome of the background hydration verification.
    ///
    /// A fresh user overwrites the cached copy (it may carry status or
    /// profile changes an admin made between sessions). `Unauthorized`
    /// means the token is dead, so the session is torn down, matching the
    /// transport's global 401 handling. Any other failure is treated as
    /// transient and the optimistic session survives.
    fn apply_verification_result(&self, result: Result<User, ApiError>) {
        match result {
            Ok(user) => {
                if let Some(token) = self.store.token() {
                    self.store.save(&token, &user);
                }
                self.state.update(|state| state.confirm(user));
            }
            Err(ApiError::Unauthorized) => {
                self.store.clear();
                self.state.update(AuthState::settle_anonymous);
            }
            Err(err) => {
                leptos::logging::warn!("session verification failed; keeping cached session: {err}");
            }
        }
    }

    fn apply_login_result(&self, result: Result<LoginResponse, ApiError>) -> Result<User, ApiError> {
        match result {
            Ok(response) => {
                self.store.save(&response.access_token, &response.user);
                self.state.update(|state| state.confirm(response.user.clone()));
                Ok(response.user)
            }
            Err(err) => {
                self.store.clear();
                self.state.update(AuthState::settle_anonymous);
                Err(err)
            }
        }
    }

    fn apply_refresh_result(&self, result: Result<User, ApiError>) -> Result<User, ApiError> {
        match result {
            Ok(user) => {
                if let Some(token) = self.store.token() {
                    self.store.save(&token, &user);
                }
                self.state.update(|state| state.confirm(user.clone()));
                Ok(user)
            }
            Err(err) => {
                self.logout();
                Err(err)
            }
        }
    }
}
