use super::*;

#[test]
fn validate_register_input_accepts_trimmed_fields() {
    let body = validate_register_input(" Jane ", " jane@x.com ", "secret1", UserType::PetOwner);
    assert_eq!(
        body,
        Ok(RegisterRequest {
            name: "Jane".to_owned(),
            email: "jane@x.com".to_owned(),
            password: "secret1".to_owned(),
            user_type: UserType::PetOwner,
        })
    );
}

#[test]
fn validate_register_input_requires_name_and_email() {
    assert_eq!(
        validate_register_input("  ", "jane@x.com", "secret1", UserType::Vet),
        Err("Enter your name and email.")
    );
    assert_eq!(
        validate_register_input("Jane", "", "secret1", UserType::Vet),
        Err("Enter your name and email.")
    );
}

#[test]
fn validate_register_input_enforces_password_length() {
    assert_eq!(
        validate_register_input("Jane", "jane@x.com", "short", UserType::PetOwner),
        Err("Password must be at least 6 characters.")
    );
}

#[test]
fn register_error_message_explains_duplicate_email() {
    assert_eq!(
        register_error_message(&ApiError::Status(400)),
        "Email already registered."
    );
    assert_eq!(
        register_error_message(&ApiError::Transport("offline".to_owned())),
        "Registration failed: request failed: offline"
    );
}
