use super::*;

#[test]
fn validate_login_input_trims_username() {
    let credentials = validate_login_input("  amartin  ", "hunter22").unwrap();
    assert_eq!(credentials.username, "amartin");
    assert_eq!(credentials.password, "hunter22");
}

#[test]
fn validate_login_input_requires_username() {
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both username and password."));
}

#[test]
fn validate_login_input_requires_password() {
    assert_eq!(validate_login_input("amartin", ""), Err("Enter both username and password."));
}

#[test]
fn validate_login_input_keeps_password_verbatim() {
    // Passwords may legitimately start or end with spaces.
    let credentials = validate_login_input("amartin", " spaced pw ").unwrap();
    assert_eq!(credentials.password, " spaced pw ");
}
