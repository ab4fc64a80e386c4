//! REST layer: request plumbing, endpoint calls, and wire DTOs.

pub mod api;
pub mod http;
pub mod types;
