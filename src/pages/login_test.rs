use super::*;

#[test]
fn validate_login_input_trims_email_and_requires_both_fields() {
    assert_eq!(
        validate_login_input("  user@example.com  ", "secret1"),
        Ok(LoginRequest {
            email: "user@example.com".to_owned(),
            password: "secret1".to_owned(),
        })
    );
    assert_eq!(validate_login_input("   ", "secret1"), Err("Enter both email and password."));
    assert_eq!(
        validate_login_input("user@example.com", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn login_error_message_distinguishes_bad_credentials() {
    assert_eq!(
        login_error_message(&ApiError::Status(401)),
        "Invalid email or password."
    );
    assert_eq!(
        login_error_message(&ApiError::Status(500)),
        "Login failed: unexpected status 500"
    );
}

#[test]
fn federated_login_url_embeds_encoded_redirect() {
    assert_eq!(
        federated_login_url("https%3A%2F%2Fapp.example%2Fdashboard"),
        "https://auth.emergentagent.com/?redirect=https%3A%2F%2Fapp.example%2Fdashboard"
    );
}
