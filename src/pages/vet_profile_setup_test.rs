use super::*;

#[test]
fn validate_profile_input_builds_request() {
    let body = validate_profile_input(
        " KVB-1001 ",
        "Surgery",
        "Embu",
        "+254700000000",
        " Large animal surgeon ",
        " 7 ",
    );
    assert_eq!(
        body,
        Ok(VetProfileCreate {
            license_number: "KVB-1001".to_owned(),
            specialty: "Surgery".to_owned(),
            location: "Embu".to_owned(),
            phone: "+254700000000".to_owned(),
            bio: "Large animal surgeon".to_owned(),
            experience_years: 7,
        })
    );
}

#[test]
fn validate_profile_input_requires_core_fields() {
    assert_eq!(
        validate_profile_input("", "Surgery", "Embu", "+254700", "", "7"),
        Err("License, specialty, location, and phone are required.")
    );
    assert_eq!(
        validate_profile_input("KVB-1", "Surgery", "Embu", "  ", "", "7"),
        Err("License, specialty, location, and phone are required.")
    );
}

#[test]
fn validate_profile_input_rejects_non_numeric_experience() {
    assert_eq!(
        validate_profile_input("KVB-1", "Surgery", "Embu", "+254700", "", "seven"),
        Err("Years of experience must be a whole number.")
    );
    assert_eq!(
        validate_profile_input("KVB-1", "Surgery", "Embu", "+254700", "", "-1"),
        Err("Years of experience must be a whole number.")
    );
}

#[test]
fn validate_profile_input_allows_empty_bio() {
    let body = validate_profile_input("KVB-1", "Surgery", "Embu", "+254700", "", "0").unwrap();
    assert_eq!(body.bio, "");
    assert_eq!(body.experience_years, 0);
}
