use super::*;

#[test]
fn role_selection_allows_teacher_and_student_only() {
    assert_eq!(role_from_selection("teacher"), Some(Role::Teacher));
    assert_eq!(role_from_selection("student"), Some(Role::Student));
    assert_eq!(role_from_selection("admin"), None);
    assert_eq!(role_from_selection(""), None);
}

#[test]
fn validate_register_input_builds_payload() {
    let payload =
        validate_register_input("  Ada M.  ", " ada ", " ada@example.edu ", "longenough", "teacher").unwrap();
    assert_eq!(payload.full_name, "Ada M.");
    assert_eq!(payload.username, "ada");
    assert_eq!(payload.email, "ada@example.edu");
    assert_eq!(payload.role, Role::Teacher);
}

#[test]
fn validate_register_input_requires_identity_fields() {
    assert_eq!(
        validate_register_input("", "ada", "ada@example.edu", "longenough", "student"),
        Err("Fill in your name, username, and email.")
    );
    assert_eq!(
        validate_register_input("Ada", "", "ada@example.edu", "longenough", "student"),
        Err("Fill in your name, username, and email.")
    );
}

#[test]
fn validate_register_input_rejects_bad_email() {
    assert_eq!(
        validate_register_input("Ada", "ada", "not-an-email", "longenough", "student"),
        Err("Enter a valid email address.")
    );
}

#[test]
fn validate_register_input_rejects_short_password() {
    assert_eq!(
        validate_register_input("Ada", "ada", "ada@example.edu", "short", "student"),
        Err("Password must be at least 8 characters.")
    );
}

#[test]
fn validate_register_input_rejects_unknown_role() {
    assert_eq!(
        validate_register_input("Ada", "ada", "ada@example.edu", "longenough", "admin"),
        Err("Choose whether you are registering as a teacher or a student.")
    );
}
