//! Core domain entities
//!
//! All business entities are defined here. These are pure data structures
//! with validation logic - no I/O or external dependencies.

mod credentials;
mod session;
mod user;
pub mod result;

pub use credentials::{Credentials, LogoutParams};
pub use session::Session;
pub use user::User;
