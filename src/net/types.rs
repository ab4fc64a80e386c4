//! Wire DTOs for the `/api` JSON contract.
//!
//! DESIGN
//! ======
//! These types mirror the backend payloads field-for-field so serde
//! round-trips stay lossless. Identifiers are server-issued opaque
//! strings; the client never parses or fabricates them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role, fixed at registration (federated signups default to
/// `PetOwner` server-side).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    PetOwner,
    Vet,
}

/// An authenticated user as returned by `/api/auth/me` and the auth flows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-issued user identifier.
    pub user_id: String,
    /// Display name.
    pub name: String,
    pub email: String,
    pub user_type: UserType,
    /// Avatar URL, present for federated accounts.
    pub picture: Option<String>,
}

/// Successful response from registration, login, and the session exchange.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Opaque bearer token; stored verbatim, never inspected.
    pub session_token: String,
    pub user: User,
}

/// Body for `POST /api/auth/register`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub user_type: UserType,
}

/// Body for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// A vet's public profile, enriched with the owning user's name/picture.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VetProfile {
    pub user_id: String,
    pub license_number: String,
    pub specialty: String,
    pub location: String,
    pub phone: String,
    pub bio: String,
    pub experience_years: u32,
    pub available: bool,
    /// Filled in by the list/detail endpoints, absent on `/vet/profile/me`.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

/// Body for `POST /api/vet/profile`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VetProfileCreate {
    pub license_number: String,
    pub specialty: String,
    pub location: String,
    pub phone: String,
    pub bio: String,
    pub experience_years: u32,
}

/// An appointment, enriched with both parties' display names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: String,
    pub pet_owner_id: String,
    pub vet_id: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub pet_name: String,
    pub pet_type: String,
    pub reason: String,
    /// `pending` until the vet confirms, `confirmed` once paid.
    pub status: String,
    pub amount: f64,
    /// `pending` or `paid`.
    pub payment_status: String,
    #[serde(default)]
    pub vet_name: Option<String>,
    #[serde(default)]
    pub owner_name: Option<String>,
}

/// Body for `POST /api/appointments`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppointmentCreate {
    pub vet_id: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub pet_name: String,
    pub pet_type: String,
    pub reason: String,
}

/// Response from `POST /api/payments/checkout`: the external checkout URL
/// to hand the browser to, plus the session id the return page polls on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub url: String,
    pub session_id: String,
}

/// Response from `GET /api/payments/status/:session_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentStatusResponse {
    pub payment_status: String,
}

impl PaymentStatusResponse {
    pub fn is_paid(&self) -> bool {
        self.payment_status == "paid"
    }
}

/// An emergency alert raised by a pet owner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmergencyRequest {
    pub request_id: String,
    pub pet_owner_id: String,
    pub location: String,
    pub description: String,
    pub pet_name: String,
    pub pet_type: String,
    /// `active` until a vet accepts, then `accepted`.
    pub status: String,
    #[serde(default)]
    pub owner_name: Option<String>,
}

/// Body for `POST /api/emergency`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EmergencyCreate {
    pub location: String,
    pub description: String,
    pub pet_name: String,
    pub pet_type: String,
}
