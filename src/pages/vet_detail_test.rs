use super::*;

#[test]
fn validate_booking_input_builds_request_for_complete_form() {
    let body = validate_booking_input("user_v1", "2026-08-10", "10:30", " Max ", " Dog ", " Limping ");
    assert_eq!(
        body,
        Ok(AppointmentCreate {
            vet_id: "user_v1".to_owned(),
            appointment_date: "2026-08-10".to_owned(),
            appointment_time: "10:30".to_owned(),
            pet_name: "Max".to_owned(),
            pet_type: "Dog".to_owned(),
            reason: "Limping".to_owned(),
        })
    );
}

#[test]
fn validate_booking_input_rejects_any_missing_field() {
    let err = Err("Fill in every field to book an appointment.");
    assert_eq!(validate_booking_input("v", "", "10:30", "Max", "Dog", "Limping"), err);
    assert_eq!(validate_booking_input("v", "2026-08-10", "", "Max", "Dog", "Limping"), err);
    assert_eq!(validate_booking_input("v", "2026-08-10", "10:30", "  ", "Dog", "Limping"), err);
    assert_eq!(validate_booking_input("v", "2026-08-10", "10:30", "Max", "", "Limping"), err);
    assert_eq!(validate_booking_input("v", "2026-08-10", "10:30", "Max", "Dog", " "), err);
}
