use futures::executor::block_on;

use super::*;

#[test]
fn endpoints_are_stable() {
    assert_eq!(login_endpoint(), "/auth/login");
    assert_eq!(register_endpoint(), "/auth/register");
    assert_eq!(current_user_endpoint(), "/auth/me");
}

#[test]
fn bearer_header_value_formats_token() {
    assert_eq!(bearer_header_value("tok-123"), "Bearer tok-123");
}

#[test]
fn request_timeout_is_thirty_seconds() {
    assert_eq!(REQUEST_TIMEOUT_MS, 30_000);
}

// Outside the hydrate build the wrappers must fail fast instead of
// pretending a network exists.

#[test]
fn login_stub_fails_off_browser() {
    let result = block_on(login(&Credentials {
        username: "u".to_owned(),
        password: "p".to_owned(),
    }));
    assert_eq!(result.unwrap_err(), ApiError::unavailable());
}

#[test]
fn fetch_current_user_stub_fails_off_browser() {
    assert_eq!(block_on(fetch_current_user()).unwrap_err(), ApiError::unavailable());
}
