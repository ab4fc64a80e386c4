use super::*;

#[test]
fn validate_emergency_input_builds_request() {
    let body = validate_emergency_input(" Embu, Kenya ", " Max ", " Dog ", " Hit by a car ");
    assert_eq!(
        body,
        Ok(EmergencyCreate {
            location: "Embu, Kenya".to_owned(),
            description: "Hit by a car".to_owned(),
            pet_name: "Max".to_owned(),
            pet_type: "Dog".to_owned(),
        })
    );
}

#[test]
fn validate_emergency_input_requires_every_field() {
    let err = Err("Every field is required to send an alert.");
    assert_eq!(validate_emergency_input("", "Max", "Dog", "Hurt"), err);
    assert_eq!(validate_emergency_input("Embu", " ", "Dog", "Hurt"), err);
    assert_eq!(validate_emergency_input("Embu", "Max", "", "Hurt"), err);
    assert_eq!(validate_emergency_input("Embu", "Max", "Dog", "  "), err);
}
