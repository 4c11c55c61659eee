//! Service layer providing business-oriented operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in the `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod access;
pub mod auth;
pub mod businesses;
pub mod errors;
pub mod products;
pub mod reactions;
pub mod users;
