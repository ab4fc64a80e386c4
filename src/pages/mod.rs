//! Page-level route components.

pub mod appointments;
pub mod auth_callback;
pub mod chats;
pub mod dashboard;
pub mod emergency;
pub mod landing;
pub mod login;
pub mod payment_return;
pub mod register;
pub mod vet_detail;
pub mod vet_directory;
pub mod vet_profile_setup;
