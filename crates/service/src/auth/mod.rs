//! Credential manager: password hashing, token issuance and verification.
//!
//! Registration and login sit on top of the user directory; tokens are
//! HS256 JWTs carrying the subject id, email and account kind.

pub mod domain;
pub mod service;

pub use service::{AuthConfig, AuthService};
