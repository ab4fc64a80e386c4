//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>` so auth, booking, and payment
//! flows can distinguish transport failures from status rejections. No
//! function here retries or redirects; policy lives with the callers.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{
    Appointment, AppointmentCreate, AuthResponse, CheckoutSession, EmergencyCreate,
    EmergencyRequest, LoginRequest, PaymentStatusResponse, RegisterRequest, User, VetProfile,
    VetProfileCreate,
};
#[cfg(feature = "hydrate")]
use crate::net::http::with_auth;
use crate::state::session::SessionStore;

/// Header carrying the one-time federated-login session id. The id goes
/// in a header, never a query parameter, so it cannot leak into request
/// logs or browser history.
pub const SESSION_ID_HEADER: &str = "X-Session-ID";

/// Failure of a single API call.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, abort).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The call was made during server rendering.
    #[error("not available on the server")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn vet_endpoint(vet_id: &str) -> String {
    format!("/api/vets/{vet_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn payment_status_endpoint(session_id: &str) -> String {
    format!("/api/payments/status/{session_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn checkout_endpoint(appointment_id: &str, origin_url: &str) -> String {
    format!("/api/payments/checkout?appointment_id={appointment_id}&origin_url={origin_url}")
}

#[cfg(any(test, feature = "hydrate"))]
fn emergency_accept_endpoint(request_id: &str) -> String {
    format!("/api/emergency/{request_id}/accept")
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns an error if the request fails, the email is already taken
/// (`Status(400)`), or the body cannot be decoded.
pub async fn register(body: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::Unavailable)
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns `Status(401)` on bad credentials, or a transport/decode error.
pub async fn login(body: &LoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::Unavailable)
    }
}

/// Exchange a one-time federated-login id for a durable session via
/// `POST /api/auth/google-session`.
///
/// # Errors
///
/// Returns `Status(401)` when the id is expired or already consumed, or a
/// transport/decode error.
pub async fn exchange_login_session(session_id: &str) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/google-session")
            .header(SESSION_ID_HEADER, session_id)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
        Err(ApiError::Unavailable)
    }
}

/// Resolve the current identity via `GET /api/auth/me` using the stored
/// bearer token and ambient cookies.
///
/// # Errors
///
/// Returns `Status(401)` when neither credential resolves to a live
/// session, or a transport/decode error.
pub async fn fetch_current_user(session: &SessionStore) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get("/api/auth/me"), session)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::Unavailable)
    }
}

/// Invalidate the server-side session via `POST /api/auth/logout`.
///
/// Best-effort: the local session is cleared by the caller regardless of
/// whether the server acknowledged.
pub async fn logout(session: &SessionStore) {
    #[cfg(feature = "hydrate")]
    {
        let _ = with_auth(gloo_net::http::Request::post("/api/auth/logout"), session)
            .send()
            .await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Fetch the signed-in vet's own profile via `GET /api/vet/profile/me`.
///
/// Returns `Ok(None)` when no profile exists yet (the 404 that routes a
/// fresh vet to profile setup).
///
/// # Errors
///
/// Returns an error for any failure other than the not-found case.
pub async fn fetch_my_vet_profile(session: &SessionStore) -> Result<Option<VetProfile>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get("/api/vet/profile/me"), session)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if resp.status() == 404 {
            return Ok(None);
        }
        read_json(resp).await.map(Some)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::Unavailable)
    }
}

/// Create the signed-in vet's profile via `POST /api/vet/profile`.
///
/// # Errors
///
/// Returns `Status(400)` when a profile already exists, or a
/// transport/decode error.
pub async fn create_vet_profile(
    session: &SessionStore,
    body: &VetProfileCreate,
) -> Result<VetProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post("/api/vet/profile"), session)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, body);
        Err(ApiError::Unavailable)
    }
}

/// List available vets via `GET /api/vets`.
///
/// # Errors
///
/// Returns a transport, status, or decode error.
pub async fn fetch_vets(session: &SessionStore) -> Result<Vec<VetProfile>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get("/api/vets"), session)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one vet's profile via `GET /api/vets/:id`.
///
/// # Errors
///
/// Returns `Status(404)` for an unknown vet, or a transport/decode error.
pub async fn fetch_vet(session: &SessionStore, vet_id: &str) -> Result<VetProfile, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = vet_endpoint(vet_id);
        let resp = with_auth(gloo_net::http::Request::get(&url), session)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, vet_id);
        Err(ApiError::Unavailable)
    }
}

/// List the caller's appointments via `GET /api/appointments`. The server
/// scopes the list by role (owner bookings vs. vet schedule).
///
/// # Errors
///
/// Returns a transport, status, or decode error.
pub async fn fetch_appointments(session: &SessionStore) -> Result<Vec<Appointment>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get("/api/appointments"), session)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::Unavailable)
    }
}

/// Book an appointment via `POST /api/appointments`.
///
/// # Errors
///
/// Returns a transport, status, or decode error.
pub async fn create_appointment(
    session: &SessionStore,
    body: &AppointmentCreate,
) -> Result<Appointment, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post("/api/appointments"), session)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, body);
        Err(ApiError::Unavailable)
    }
}

/// Start an external checkout for an appointment via
/// `POST /api/payments/checkout`. `origin_url` must already be
/// percent-encoded by the caller.
///
/// # Errors
///
/// Returns `Status(404)` for an unknown appointment, or a
/// transport/decode error.
pub async fn create_checkout_session(
    session: &SessionStore,
    appointment_id: &str,
    origin_url: &str,
) -> Result<CheckoutSession, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = checkout_endpoint(appointment_id, origin_url);
        let resp = with_auth(gloo_net::http::Request::post(&url), session)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, appointment_id, origin_url);
        Err(ApiError::Unavailable)
    }
}

/// Check a checkout session's settlement state via
/// `GET /api/payments/status/:session_id`. Unauthenticated by contract.
///
/// # Errors
///
/// Returns a transport, status, or decode error. Callers treat any error
/// as a terminal polling failure.
pub async fn fetch_payment_status(session_id: &str) -> Result<PaymentStatusResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = payment_status_endpoint(session_id);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
        Err(ApiError::Unavailable)
    }
}

/// Raise an emergency alert via `POST /api/emergency`.
///
/// # Errors
///
/// Returns a transport, status, or decode error.
pub async fn create_emergency_request(
    session: &SessionStore,
    body: &EmergencyCreate,
) -> Result<EmergencyRequest, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post("/api/emergency"), session)
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, body);
        Err(ApiError::Unavailable)
    }
}

/// List emergency alerts visible to the caller via `GET /api/emergency`.
///
/// # Errors
///
/// Returns a transport, status, or decode error.
pub async fn fetch_emergency_requests(
    session: &SessionStore,
) -> Result<Vec<EmergencyRequest>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get("/api/emergency"), session)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
        Err(ApiError::Unavailable)
    }
}

/// Accept an emergency alert as a vet via
/// `PATCH /api/emergency/:request_id/accept`.
///
/// # Errors
///
/// Returns a transport, status, or decode error.
pub async fn accept_emergency_request(
    session: &SessionStore,
    request_id: &str,
) -> Result<EmergencyRequest, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = emergency_accept_endpoint(request_id);
        let resp = with_auth(gloo_net::http::Request::patch(&url), session)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, request_id);
        Err(ApiError::Unavailable)
    }
}
