use super::*;

fn sample_user(user_type: UserType) -> User {
    User {
        user_id: "user_1".to_owned(),
        name: "Jane".to_owned(),
        email: "jane@x.com".to_owned(),
        user_type,
        picture: None,
    }
}

// =============================================================
// SessionIdentity
// =============================================================

#[test]
fn identity_defaults_to_unresolved() {
    assert_eq!(SessionIdentity::default(), SessionIdentity::Unresolved);
}

#[test]
fn identity_user_present_only_when_authenticated() {
    let user = sample_user(UserType::PetOwner);
    let authed = SessionIdentity::Authenticated(user.clone());
    assert_eq!(authed.user(), Some(&user));
    assert_eq!(SessionIdentity::Unresolved.user(), None);
    assert_eq!(SessionIdentity::Unauthenticated.user(), None);
}

#[test]
fn probe_success_authenticates() {
    let user = sample_user(UserType::Vet);
    assert_eq!(
        identity_after_probe(Ok(user.clone())),
        SessionIdentity::Authenticated(user)
    );
}

#[test]
fn probe_failure_is_unauthenticated_regardless_of_kind() {
    assert_eq!(
        identity_after_probe(Err(ApiError::Status(401))),
        SessionIdentity::Unauthenticated
    );
    assert_eq!(
        identity_after_probe(Err(ApiError::Transport("offline".to_owned()))),
        SessionIdentity::Unauthenticated
    );
}

// =============================================================
// ExchangeGuard
// =============================================================

#[test]
fn exchange_guard_fires_exactly_once() {
    let mut guard = ExchangeGuard::default();
    assert!(guard.try_fire());
    assert!(!guard.try_fire());
    assert!(!guard.try_fire());
}

// =============================================================
// resolve_destination
// =============================================================

#[test]
fn vet_without_profile_goes_to_setup() {
    assert_eq!(
        resolve_destination(UserType::Vet, false),
        Destination::VetProfileSetup
    );
}

#[test]
fn vet_with_profile_goes_to_dashboard() {
    assert_eq!(resolve_destination(UserType::Vet, true), Destination::Dashboard);
}

#[test]
fn pet_owner_goes_to_dashboard_either_way() {
    assert_eq!(resolve_destination(UserType::PetOwner, false), Destination::Dashboard);
    assert_eq!(resolve_destination(UserType::PetOwner, true), Destination::Dashboard);
}

#[test]
fn destination_paths() {
    assert_eq!(Destination::Dashboard.path(), "/dashboard");
    assert_eq!(Destination::VetProfileSetup.path(), "/vet/setup");
}
