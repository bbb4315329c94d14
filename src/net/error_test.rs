use super::*;

// =============================================================
// Status mapping
// =============================================================

#[test]
fn status_401_maps_to_unauthorized() {
    assert_eq!(error_from_status(401, None), ApiError::Unauthorized);
}

#[test]
fn status_403_maps_to_forbidden() {
    assert_eq!(error_from_status(403, None), ApiError::Forbidden);
}

#[test]
fn status_404_maps_to_not_found() {
    assert_eq!(error_from_status(404, None), ApiError::NotFound);
}

#[test]
fn status_408_maps_to_timeout() {
    assert_eq!(error_from_status(408, None), ApiError::Timeout);
}

#[test]
fn validation_statuses_carry_server_detail() {
    assert_eq!(
        error_from_status(400, Some("Username already registered".to_owned())),
        ApiError::Validation("Username already registered".to_owned())
    );
    assert_eq!(
        error_from_status(422, Some("value is not a valid email address".to_owned())),
        ApiError::Validation("value is not a valid email address".to_owned())
    );
}

#[test]
fn validation_without_detail_uses_generic_text() {
    assert_eq!(
        error_from_status(422, None),
        ApiError::Validation("The submitted data was rejected.".to_owned())
    );
}

#[test]
fn five_xx_maps_to_server_with_status() {
    assert_eq!(error_from_status(500, None), ApiError::Server(500));
    assert_eq!(error_from_status(503, None), ApiError::Server(503));
}

#[test]
fn unexpected_status_falls_through_to_other() {
    assert_eq!(error_from_status(418, None), ApiError::Other("unexpected status 418".to_owned()));
}

// =============================================================
// Detail body extraction
// =============================================================

#[test]
fn detail_from_body_reads_string_detail() {
    assert_eq!(
        detail_from_body(r#"{"detail": "Incorrect username or password"}"#),
        Some("Incorrect username or password".to_owned())
    );
}

#[test]
fn detail_from_body_reads_first_msg_of_validation_array() {
    let body = r#"{"detail": [{"loc": ["body", "email"], "msg": "field required", "type": "value_error"}]}"#;
    assert_eq!(detail_from_body(body), Some("field required".to_owned()));
}

#[test]
fn detail_from_body_rejects_malformed_or_missing_detail() {
    assert_eq!(detail_from_body("not json"), None);
    assert_eq!(detail_from_body(r#"{"error": "nope"}"#), None);
    assert_eq!(detail_from_body(r#"{"detail": 42}"#), None);
}

// =============================================================
// Fetch-message sniffing
// =============================================================

#[test]
fn fetch_message_network_markers_map_to_network_unreachable() {
    assert_eq!(classify_fetch_message("TypeError: Failed to fetch"), ApiError::NetworkUnreachable);
    assert_eq!(
        classify_fetch_message("NetworkError when attempting to fetch resource."),
        ApiError::NetworkUnreachable
    );
}

#[test]
fn fetch_message_timeout_markers_map_to_timeout() {
    assert_eq!(classify_fetch_message("request timed out"), ApiError::Timeout);
}

#[test]
fn fetch_message_unknown_text_is_kept_verbatim() {
    assert_eq!(
        classify_fetch_message("something odd happened"),
        ApiError::Other("something odd happened".to_owned())
    );
}

#[test]
fn unavailable_is_an_other_error() {
    assert!(matches!(ApiError::unavailable(), ApiError::Other(_)));
}
