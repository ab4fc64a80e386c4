//! Federated-login fragment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity provider returns control with a one-time session id in the
//! URL fragment (`#...session_id=<id>`). The router checks for that marker
//! synchronously before dispatching any route, and the callback page
//! consumes it exactly once.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Marker that distinguishes a federated-login return from a normal fragment.
pub const LOGIN_SESSION_MARKER: &str = "session_id=";

/// Whether `fragment` carries a federated-login session id.
pub fn fragment_has_login_session(fragment: &str) -> bool {
    session_id_from_fragment(fragment).is_some()
}

/// Extract the one-time session id from a URL fragment.
///
/// Accepts both a bare `#session_id=<id>` and a fragment where the marker
/// follows other parameters. Returns `None` when the marker is absent or
/// its value is empty.
pub fn session_id_from_fragment(fragment: &str) -> Option<String> {
    let (_, rest) = fragment.split_once(LOGIN_SESSION_MARKER)?;
    let id = rest.split('&').next().unwrap_or(rest);
    if id.is_empty() { None } else { Some(id.to_owned()) }
}
