use super::*;

#[test]
fn user_type_serializes_snake_case() {
    assert_eq!(serde_json::to_string(&UserType::PetOwner).unwrap(), "\"pet_owner\"");
    assert_eq!(serde_json::to_string(&UserType::Vet).unwrap(), "\"vet\"");
}

#[test]
fn auth_response_deserializes_backend_shape() {
    let raw = r#"{
        "session_token": "tok_1",
        "user": {
            "user_id": "user_abc",
            "name": "Jane",
            "email": "jane@x.com",
            "user_type": "pet_owner",
            "picture": null
        }
    }"#;
    let parsed: AuthResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.session_token, "tok_1");
    assert_eq!(parsed.user.user_type, UserType::PetOwner);
    assert_eq!(parsed.user.picture, None);
}

#[test]
fn vet_profile_enrichment_fields_default_to_none() {
    let raw = r#"{
        "user_id": "user_v1",
        "license_number": "KVB-1001",
        "specialty": "Surgery",
        "location": "Embu",
        "phone": "+254700000000",
        "bio": "Large animal surgeon",
        "experience_years": 7,
        "available": true
    }"#;
    let parsed: VetProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.name, None);
    assert_eq!(parsed.picture, None);
    assert_eq!(parsed.experience_years, 7);
}

#[test]
fn appointment_tolerates_missing_enrichment() {
    let raw = r#"{
        "appointment_id": "apt_1",
        "pet_owner_id": "user_o1",
        "vet_id": "user_v1",
        "appointment_date": "2026-08-10",
        "appointment_time": "10:30",
        "pet_name": "Max",
        "pet_type": "Dog",
        "reason": "Checkup",
        "status": "pending",
        "amount": 50.0,
        "payment_status": "pending"
    }"#;
    let parsed: Appointment = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.vet_name, None);
    assert_eq!(parsed.owner_name, None);
}

#[test]
fn payment_status_paid_check() {
    let paid = PaymentStatusResponse { payment_status: "paid".to_owned() };
    let open = PaymentStatusResponse { payment_status: "open".to_owned() };
    assert!(paid.is_paid());
    assert!(!open.is_paid());
}
