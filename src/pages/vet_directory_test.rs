use super::*;

fn vet(user_id: &str, name: &str, specialty: &str, location: &str) -> VetProfile {
    VetProfile {
        user_id: user_id.to_owned(),
        license_number: "KVB-1".to_owned(),
        specialty: specialty.to_owned(),
        location: location.to_owned(),
        phone: "+254700000000".to_owned(),
        bio: String::new(),
        experience_years: 5,
        available: true,
        name: Some(name.to_owned()),
        picture: None,
    }
}

fn ids(vets: &[VetProfile]) -> Vec<&str> {
    vets.iter().map(|v| v.user_id.as_str()).collect()
}

#[test]
fn empty_filters_match_everything() {
    let vets = vec![vet("a", "Amina", "Surgery", "Embu"), vet("b", "Brian", "Dermatology", "Nairobi")];
    assert_eq!(ids(&filter_vets(&vets, "", "", "")), vec!["a", "b"]);
}

#[test]
fn query_matches_name_or_specialty_case_insensitive() {
    let vets = vec![vet("a", "Amina", "Surgery", "Embu"), vet("b", "Brian", "Dermatology", "Nairobi")];
    assert_eq!(ids(&filter_vets(&vets, "amina", "", "")), vec!["a"]);
    assert_eq!(ids(&filter_vets(&vets, "DERMA", "", "")), vec!["b"]);
}

#[test]
fn specialty_and_location_filters_compose() {
    let vets = vec![
        vet("a", "Amina", "Surgery", "Embu"),
        vet("b", "Brian", "Surgery", "Nairobi"),
        vet("c", "Carol", "Dentistry", "Embu"),
    ];
    assert_eq!(ids(&filter_vets(&vets, "", "surgery", "embu")), vec!["a"]);
}

#[test]
fn query_misses_when_vet_has_no_name() {
    let mut anonymous = vet("a", "Amina", "Surgery", "Embu");
    anonymous.name = None;
    assert!(filter_vets(&[anonymous.clone()], "amina", "", "").is_empty());
    // Specialty still matches without a name.
    assert_eq!(ids(&filter_vets(&[anonymous], "surgery", "", "")), vec!["a"]);
}
