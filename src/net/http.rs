//! Authenticated request plumbing.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every outbound call goes through these helpers so bearer and cookie
//! credentials are attached uniformly. The helpers do not retry and do
//! not interpret status codes; callers own response handling. A missing
//! token is not an error, the bearer header is simply omitted.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

#[cfg(feature = "hydrate")]
use crate::state::session::SessionStore;

/// Value for the `Authorization` header.
pub fn bearer_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Attach bearer (when present) and cookie credentials to a request.
#[cfg(feature = "hydrate")]
pub fn with_auth(
    builder: gloo_net::http::RequestBuilder,
    session: &SessionStore,
) -> gloo_net::http::RequestBuilder {
    let builder = builder.credentials(web_sys::RequestCredentials::Include);
    match session.get() {
        Some(token) => builder.header("Authorization", &bearer_header_value(&token)),
        None => builder,
    }
}
