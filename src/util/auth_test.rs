use super::*;

#[test]
fn session_id_from_bare_fragment() {
    assert_eq!(session_id_from_fragment("#session_id=abc123"), Some("abc123".to_owned()));
}

#[test]
fn session_id_after_other_parameters() {
    assert_eq!(
        session_id_from_fragment("#state=xyz&session_id=tok-1"),
        Some("tok-1".to_owned())
    );
}

#[test]
fn session_id_stops_at_next_parameter() {
    assert_eq!(
        session_id_from_fragment("#session_id=tok-1&state=xyz"),
        Some("tok-1".to_owned())
    );
}

#[test]
fn missing_marker_yields_none() {
    assert_eq!(session_id_from_fragment("#access_token=abc"), None);
    assert_eq!(session_id_from_fragment(""), None);
}

#[test]
fn empty_value_yields_none() {
    assert_eq!(session_id_from_fragment("#session_id="), None);
}

#[test]
fn fragment_has_login_session_matches_extraction() {
    assert!(fragment_has_login_session("#session_id=abc"));
    assert!(!fragment_has_login_session("#session_id="));
    assert!(!fragment_has_login_session("#foo=bar"));
}
