//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and user-aware pages to coordinate login
//! redirects and identity-dependent rendering. The auth bootstrap and the
//! login/register flows populate the identity; logout resets it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::ApiError;
use crate::net::types::{User, UserType};

/// Resolution state of the current user's identity.
///
/// `Unresolved` means no probe has completed yet for this app instance;
/// the route guard issues a single `/api/auth/me` probe and settles into
/// one of the two terminal variants.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SessionIdentity {
    #[default]
    Unresolved,
    Authenticated(User),
    Unauthenticated,
}

impl SessionIdentity {
    /// The resolved user, if authenticated.
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Identity state after an identity-probe response.
///
/// A strict function of the probe result: any failure, transport or
/// status, resolves to `Unauthenticated` with no retry.
pub fn identity_after_probe(result: Result<User, ApiError>) -> SessionIdentity {
    match result {
        Ok(user) => SessionIdentity::Authenticated(user),
        Err(_) => SessionIdentity::Unauthenticated,
    }
}

/// One-shot guard around the session exchange.
///
/// The callback view can render more than once while the exchange is in
/// flight; the guard makes the exchange itself exactly-once. `try_fire`
/// succeeds only on the first call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExchangeGuard {
    #[default]
    Armed,
    Fired,
}

impl ExchangeGuard {
    /// Arm-and-trip: returns `true` exactly once.
    pub fn try_fire(&mut self) -> bool {
        match self {
            Self::Armed => {
                *self = Self::Fired;
                true
            }
            Self::Fired => false,
        }
    }
}

/// Where a freshly authenticated user lands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Dashboard,
    VetProfileSetup,
}

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/dashboard",
            Self::VetProfileSetup => "/vet/setup",
        }
    }
}

/// Post-login routing decision.
///
/// A vet with no profile on record is sent to profile setup; every other
/// combination lands on the dashboard.
pub fn resolve_destination(user_type: UserType, profile_exists: bool) -> Destination {
    match user_type {
        UserType::Vet if !profile_exists => Destination::VetProfileSetup,
        _ => Destination::Dashboard,
    }
}
