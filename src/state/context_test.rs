use futures::executor::block_on;
use leptos::prelude::*;

use super::*;
use crate::net::types::{AccountStatus, Role};

fn sample_user(id: i64) -> User {
    User {
        id,
        username: format!("user{id}"),
        email: format!("user{id}@example.edu"),
        full_name: "Sample User".to_owned(),
        role: Role::Student,
        status: AccountStatus::Approved,
        phone: None,
        department: None,
        avatar_url: None,
    }
}

fn seeded_context() -> (AuthContext, SessionStore) {
    let store = SessionStore::in_memory();
    store.save("tok-abc", &sample_user(1));
    (AuthContext::new(store.clone()), store)
}

fn snapshot(context: &AuthContext) -> AuthState {
    context.state().get_untracked()
}

// =============================================================
// Hydration
// =============================================================

#[test]
fn hydration_with_cached_session_is_optimistically_authenticated() {
    let (context, _store) = seeded_context();
    assert!(snapshot(&context).loading);

    context.hydrate();

    // Synchronous check: authenticated before any verification result
    // arrives, but not yet server-confirmed.
    let state = snapshot(&context);
    assert!(state.is_authenticated());
    assert!(!state.verified);
    assert!(!state.loading);
}

#[test]
fn hydration_with_empty_store_settles_anonymous() {
    let context = AuthContext::new(SessionStore::in_memory());
    context.hydrate();

    let state = snapshot(&context);
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn verification_success_overwrites_cached_user() {
    let (context, store) = seeded_context();
    context.hydrate();

    let mut fresh = sample_user(1);
    fresh.full_name = "Renamed By Admin".to_owned();
    fresh.status = AccountStatus::Approved;
    context.apply_verification_result(Ok(fresh.clone()));

    let state = snapshot(&context);
    assert!(state.verified);
    assert_eq!(state.user, Some(fresh.clone()));
    // The persisted copy was refreshed too, under the same token.
    let record = store.load().expect("record should persist");
    assert_eq!(record.user, fresh);
    assert_eq!(record.token, "tok-abc");
}

#[test]
fn transient_verification_failure_keeps_cached_session() {
    let (context, store) = seeded_context();
    context.hydrate();

    context.apply_verification_result(Err(ApiError::NetworkUnreachable));

    let state = snapshot(&context);
    assert!(state.is_authenticated());
    assert!(!state.verified);
    assert!(store.load().is_some());
}

#[test]
fn unauthorized_verification_tears_the_session_down() {
    let (context, store) = seeded_context();
    context.hydrate();

    context.apply_verification_result(Err(ApiError::Unauthorized));

    let state = snapshot(&context);
    assert!(!state.is_authenticated());
    assert!(store.load().is_none());
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_success_persists_and_verifies() {
    let store = SessionStore::in_memory();
    let context = AuthContext::new(store.clone());
    context.hydrate();

    let user = context
        .apply_login_result(Ok(LoginResponse {
            access_token: "tok-new".to_owned(),
            user: sample_user(3),
        }))
        .expect("login should succeed");
    assert_eq!(user.id, 3);

    let state = snapshot(&context);
    assert!(state.is_authenticated());
    assert!(state.verified);
    assert_eq!(store.token(), Some("tok-new".to_owned()));
}

#[test]
fn login_failure_clears_store_and_settles_anonymous() {
    let (context, store) = seeded_context();
    context.hydrate();

    let err = context
        .apply_login_result(Err(ApiError::Unauthorized))
        .expect_err("login should fail");
    assert_eq!(err, ApiError::Unauthorized);

    let state = snapshot(&context);
    assert!(!state.is_authenticated());
    assert!(!state.loading);
    assert!(store.load().is_none());
}

#[test]
fn login_resets_loading_on_every_path() {
    let context = AuthContext::new(SessionStore::in_memory());
    context.hydrate();

    // Off-browser the API stub fails; loading must still be reset by the
    // scoped guard rather than left dangling.
    let result = block_on(context.login(&Credentials {
        username: "u".to_owned(),
        password: "wrong".to_owned(),
    }));
    assert!(result.is_err());
    assert!(!snapshot(&context).loading);
}

// =============================================================
// Register
// =============================================================

#[test]
fn register_never_authenticates() {
    let context = AuthContext::new(SessionStore::in_memory());
    context.hydrate();

    let result = block_on(context.register(&RegisterPayload {
        username: "newbie".to_owned(),
        email: "newbie@example.edu".to_owned(),
        password: "pw".to_owned(),
        full_name: "New B.".to_owned(),
        role: Role::Student,
    }));
    assert!(result.is_err());

    let state = snapshot(&context);
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_session_and_is_idempotent() {
    let (context, store) = seeded_context();
    context.hydrate();

    context.logout();
    assert!(!snapshot(&context).is_authenticated());
    assert!(store.load().is_none());

    // Logging out while already anonymous changes nothing.
    context.logout();
    assert_eq!(snapshot(&context), AuthState::anonymous());
}

// =============================================================
// Profile updates
// =============================================================

#[test]
fn update_user_merges_and_persists() {
    let (context, store) = seeded_context();
    context.hydrate();

    context.update_user(&UserUpdate {
        full_name: Some("B".to_owned()),
        ..UserUpdate::default()
    });

    let state = snapshot(&context);
    let user = state.user.expect("still authenticated");
    assert_eq!(user.full_name, "B");
    assert_eq!(user.id, 1);
    assert_eq!(user.role, Role::Student);

    let record = store.load().expect("merged record should persist");
    assert_eq!(record.user.full_name, "B");
    assert_eq!(record.token, "tok-abc");
}

#[test]
fn update_user_is_a_no_op_when_anonymous() {
    let store = SessionStore::in_memory();
    let context = AuthContext::new(store.clone());
    context.hydrate();

    context.update_user(&UserUpdate {
        full_name: Some("B".to_owned()),
        ..UserUpdate::default()
    });

    assert!(!snapshot(&context).is_authenticated());
    assert!(store.load().is_none());
}

// =============================================================
// Refresh
// =============================================================

#[test]
fn refresh_success_overwrites_memory_and_store() {
    let (context, store) = seeded_context();
    context.hydrate();

    let mut fresh = sample_user(1);
    fresh.department = Some("Mathematics".to_owned());
    let user = context
        .apply_refresh_result(Ok(fresh.clone()))
        .expect("refresh should succeed");
    assert_eq!(user, fresh);
    assert!(snapshot(&context).verified);
    assert_eq!(store.load().map(|r| r.user), Some(fresh));
}

#[test]
fn refresh_failure_forces_logout() {
    let (context, store) = seeded_context();
    context.hydrate();

    let err = context
        .apply_refresh_result(Err(ApiError::Server(500)))
        .expect_err("refresh should fail");
    assert_eq!(err, ApiError::Server(500));

    let state = snapshot(&context);
    assert!(!state.is_authenticated());
    assert!(store.load().is_none());
}
