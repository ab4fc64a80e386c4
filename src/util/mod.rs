//! Small cross-cutting helpers shared by pages and state.

pub mod auth;
pub mod storage;
