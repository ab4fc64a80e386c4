use super::*;

#[test]
fn vet_endpoint_formats_expected_path() {
    assert_eq!(vet_endpoint("user_v1"), "/api/vets/user_v1");
}

#[test]
fn payment_status_endpoint_formats_expected_path() {
    assert_eq!(payment_status_endpoint("cs_abc"), "/api/payments/status/cs_abc");
}

#[test]
fn checkout_endpoint_carries_both_query_parameters() {
    assert_eq!(
        checkout_endpoint("apt_1", "https%3A%2F%2Fapp.example"),
        "/api/payments/checkout?appointment_id=apt_1&origin_url=https%3A%2F%2Fapp.example"
    );
}

#[test]
fn emergency_accept_endpoint_formats_expected_path() {
    assert_eq!(emergency_accept_endpoint("req_9"), "/api/emergency/req_9/accept");
}

#[test]
fn session_id_header_name() {
    assert_eq!(SESSION_ID_HEADER, "X-Session-ID");
}

#[test]
fn api_error_display_is_stable() {
    assert_eq!(ApiError::Status(401).to_string(), "unexpected status 401");
    assert_eq!(
        ApiError::Transport("offline".to_owned()).to_string(),
        "request failed: offline"
    );
}
